//! # dashboard-rs-forms
//!
//! Form state for the dashboard-rs admin pages. A [`FormState`] owns the edited
//! copy of a record, tracks whether it has been touched since the last reset,
//! maps server-side validation errors onto top-level field names, and flips
//! membership in array-valued fields by structural equality.
//!
//! The concrete sale-create form and the confirm-button transition state used
//! by the discount pages live in [`sale`] and [`transition`].

pub mod equality;
pub mod errors;
pub mod event;
pub mod form_state;
pub mod record;
pub mod sale;
pub mod toggle;
pub mod transition;

pub use equality::deep_equal;
pub use errors::{map_errors, FieldErrorMap, RawFieldError};
pub use event::{ChangeEvent, ChangeTarget};
pub use form_state::FormState;
pub use record::FormRecord;
pub use toggle::toggle;
