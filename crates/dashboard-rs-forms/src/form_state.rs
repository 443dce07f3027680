//! The form state machine behind every dashboard page form.
//!
//! A [`FormState`] owns the edited copy of a record and derives everything a
//! page renders from it:
//!
//! - `data`: the current record, replaced wholesale on each edit
//! - `errors`: server errors mapped onto top-level fields, recomputed on read
//! - `has_changed`: set by the first edit, cleared only by [`FormState::reset`]
//!
//! The host re-supplies its initial snapshot and error list on every render
//! through [`FormState::sync`]. A new snapshot replaces the data only while
//! the form is clean; once the user has edited, the edits are kept and the
//! form reports itself [stale](FormState::is_stale) instead.
//!
//! # Examples
//!
//! ```
//! use dashboard_rs_forms::{ChangeEvent, FormState};
//! use serde_json::{json, Map, Value};
//!
//! let initial: Map<String, Value> =
//!     serde_json::from_value(json!({ "name": "", "type": [] })).unwrap();
//! let mut form = FormState::new(initial, Vec::new(), |data: &Map<String, Value>| data.clone());
//!
//! form.change(ChangeEvent::new("name", "Summer Sale"));
//! form.toggle_value(ChangeEvent::new("type", "PERCENTAGE"));
//! assert!(form.has_changed());
//!
//! let submitted = form.submit();
//! assert_eq!(submitted["type"], json!(["PERCENTAGE"]));
//! ```

use serde_json::Value;

use dashboard_rs_core::{FormError, FormResult, FormSettings};

use crate::equality::deep_equal;
use crate::errors::{map_errors_with, FieldErrorMap, RawFieldError};
use crate::event::ChangeEvent;
use crate::record::FormRecord;
use crate::toggle::toggle;

/// In-memory state of one form session.
///
/// `T` is the record being edited and `F` the host's submit callback.
pub struct FormState<T, F> {
    /// Last snapshot the host supplied.
    baseline: T,
    /// Current, possibly edited, record.
    data: T,
    raw_errors: Vec<RawFieldError>,
    has_changed: bool,
    stale: bool,
    on_submit: F,
    settings: FormSettings,
}

impl<T, F> FormState<T, F>
where
    T: FormRecord,
{
    /// Starts a clean session over `initial`.
    pub fn new(initial: T, errors: Vec<RawFieldError>, on_submit: F) -> Self {
        Self {
            data: initial.clone(),
            baseline: initial,
            raw_errors: errors,
            has_changed: false,
            stale: false,
            on_submit,
            settings: FormSettings::default(),
        }
    }

    /// Replaces the settings used for error mapping and diagnostics.
    #[must_use]
    pub fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The current record.
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// The host snapshot the form resets to.
    pub const fn initial(&self) -> &T {
        &self.baseline
    }

    /// Per-field error messages derived from the latest raw error list.
    pub fn errors(&self) -> FieldErrorMap {
        map_errors_with(
            Some(self.raw_errors.as_slice()),
            self.settings.error_path_separator,
        )
    }

    /// Whether the form has been edited since the session start or the last reset.
    pub const fn has_changed(&self) -> bool {
        self.has_changed
    }

    /// Whether the host supplied a new snapshot that was held back because of
    /// pending edits.
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// The current value of a single field.
    pub fn field(&self, name: &str) -> Option<Value> {
        self.data.field(name)
    }

    /// Replaces `name` with `value`, returning the reason if it cannot.
    ///
    /// On error nothing changes, including the dirty flag.
    pub fn try_change(&mut self, name: &str, value: Value) -> FormResult<()> {
        self.data = self.data.with_field(name, value)?;
        self.has_changed = true;
        Ok(())
    }

    /// Applies a widget change. Unknown fields are reported and ignored.
    pub fn change(&mut self, event: ChangeEvent) {
        self.apply_change(event);
    }

    /// Applies a widget change and then runs `cb`.
    ///
    /// `cb` does not run when the change is rejected.
    pub fn change_then(&mut self, event: ChangeEvent, cb: impl FnOnce()) {
        if self.apply_change(event) {
            cb();
        }
    }

    /// Flips membership of the event's value in an array field.
    ///
    /// Fields that do not currently hold an array are left alone.
    pub fn toggle_value(&mut self, event: ChangeEvent) {
        self.apply_toggle(event);
    }

    /// Like [`toggle_value`](Self::toggle_value), then runs `cb` whether or
    /// not the field was an array.
    pub fn toggle_value_then(&mut self, event: ChangeEvent, cb: impl FnOnce()) {
        self.apply_toggle(event);
        cb();
    }

    /// Discards local edits and returns to the host's snapshot.
    pub fn reset(&mut self) {
        self.data = self.baseline.clone();
        self.has_changed = false;
        self.stale = false;
    }

    /// Marks the form dirty without touching its data.
    pub fn trigger_change(&mut self) {
        self.has_changed = true;
    }

    /// Hands the current data to the submit callback and returns its result.
    ///
    /// The dirty flag is left as is: it tracks edits against the snapshot,
    /// not against the last submission.
    pub fn submit<R>(&mut self) -> R
    where
        F: FnMut(&T) -> R,
    {
        (self.on_submit)(&self.data)
    }

    /// Takes the host's snapshot and error list for the current render.
    ///
    /// The error list always replaces the previous one. A snapshot equal to
    /// the last one seen is ignored; a different one becomes the reset target
    /// and, if the form is clean, the current data as well.
    pub fn sync(&mut self, initial: T, errors: Vec<RawFieldError>) {
        self.raw_errors = errors;
        if initial == self.baseline {
            return;
        }
        if self.has_changed {
            tracing::debug!("Host snapshot changed with pending edits; keeping local data");
            self.stale = true;
        } else {
            tracing::trace!("Adopting new host snapshot");
            self.data = initial.clone();
            self.stale = false;
        }
        self.baseline = initial;
    }

    fn apply_change(&mut self, event: ChangeEvent) -> bool {
        let ChangeEvent { target } = event;
        match self.try_change(&target.name, target.value) {
            Ok(()) => true,
            Err(err) => {
                self.report(&err);
                false
            }
        }
    }

    fn apply_toggle(&mut self, event: ChangeEvent) {
        let ChangeEvent { target } = event;
        let Some(Value::Array(current)) = self.data.field(&target.name) else {
            tracing::trace!(field = %target.name, "Ignoring toggle on a non-array field");
            return;
        };
        let toggled = toggle(target.value, &current, deep_equal);
        if let Err(err) = self.try_change(&target.name, Value::Array(toggled)) {
            self.report(&err);
        }
    }

    fn report(&self, err: &FormError) {
        match err {
            FormError::UnknownField(name) => {
                if self.settings.log_unknown_fields {
                    tracing::error!(field = %name, "Unknown form field: {name}");
                }
            }
            other => tracing::error!("{other}"),
        }
    }
}

impl<T, F> std::fmt::Debug for FormState<T, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("data", &self.data)
            .field("baseline", &self.baseline)
            .field("raw_errors", &self.raw_errors)
            .field("has_changed", &self.has_changed)
            .field("stale", &self.stale)
            .finish_non_exhaustive()
    }
}
