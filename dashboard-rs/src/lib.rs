//! # dashboard-rs
//!
//! Form state for the dashboard-rs admin pages.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient access.
//! You can depend on `dashboard-rs` to get everything, or depend on individual
//! crates for finer-grained control.

/// Core error types, settings, and logging.
pub use dashboard_rs_core as core;

/// Form state, server error mapping, and array toggles.
#[cfg(feature = "forms")]
pub use dashboard_rs_forms as forms;

/// Third-party re-exports.
pub use serde;
pub use serde_json;
pub use tracing;

/// Commonly used types, importable with `use dashboard_rs::prelude::*`.
pub mod prelude {
    pub use dashboard_rs_core::{FormError, FormResult, FormSettings};

    #[cfg(feature = "forms")]
    pub use dashboard_rs_forms::{
        deep_equal, map_errors, toggle, ChangeEvent, FieldErrorMap, FormRecord, FormState,
        RawFieldError,
    };
}
