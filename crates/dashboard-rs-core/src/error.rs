//! Core error types for dashboard-rs.
//!
//! [`FormError`] covers the failures a form session can run into: edits that
//! name a field the record does not have, values the record cannot hold, and
//! configuration problems while loading [`FormSettings`](crate::settings::FormSettings).
//!
//! None of these are fatal to a form session. The form layer absorbs them and
//! reports them through `tracing`; the typed variants exist for callers that
//! want the error instead of a log line.

use thiserror::Error;

/// The primary error type for dashboard-rs.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Form state ───────────────────────────────────────────────────

    /// A change named a field that is not a key of the current record.
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    /// The new value could not be stored in the record's field.
    #[error("Invalid value for form field '{field}': {source}")]
    InvalidValue {
        /// The field that rejected the value.
        field: String,
        /// The underlying conversion failure.
        #[source]
        source: serde_json::Error,
    },

    /// The form data does not serialize to a keyed record.
    #[error("Form data is not a record: {0}")]
    NotARecord(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FormError {
    /// Returns the name of the field this error concerns, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownField(field) | Self::InvalidValue { field, .. } => Some(field.as_str()),
            Self::NotARecord(_) | Self::ConfigurationError(_) | Self::SerializationError(_) => {
                None
            }
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;
