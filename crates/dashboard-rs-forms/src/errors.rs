//! Mapping server-side validation errors onto form fields.
//!
//! A submission target reports failures as a list of `{ field, message }`
//! entries. The `field` may carry a sub-path after a separator
//! (`price:amount`); only the part before the first separator names the form
//! field. Each field shows a single message, and when several entries collapse
//! onto one field the last entry wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default separator between a field name and its sub-path.
pub const DEFAULT_PATH_SEPARATOR: char = ':';

/// A validation failure as reported by the submission target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFieldError {
    /// The field path, possibly compound (`"<field>:<subpath>"`).
    pub field: String,
    /// The human-readable message.
    pub message: String,
}

impl RawFieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Top-level field name to its single error message.
pub type FieldErrorMap = HashMap<String, String>;

/// Maps raw errors onto top-level field names using the default `:` separator.
///
/// Absent and empty inputs both yield an empty map.
///
/// # Examples
///
/// ```
/// use dashboard_rs_forms::{map_errors, RawFieldError};
///
/// let raw = vec![
///     RawFieldError::new("name", "Required"),
///     RawFieldError::new("price:amount", "Invalid"),
/// ];
/// let errors = map_errors(Some(raw.as_slice()));
/// assert_eq!(errors["name"], "Required");
/// assert_eq!(errors["price"], "Invalid");
/// assert!(map_errors(None).is_empty());
/// ```
pub fn map_errors(raw: Option<&[RawFieldError]>) -> FieldErrorMap {
    map_errors_with(raw, DEFAULT_PATH_SEPARATOR)
}

/// Like [`map_errors`] but splits field paths on `separator`.
pub fn map_errors_with(raw: Option<&[RawFieldError]>, separator: char) -> FieldErrorMap {
    let mut mapped = FieldErrorMap::new();
    for error in raw.unwrap_or_default() {
        mapped.insert(
            top_level_field(&error.field, separator).to_string(),
            error.message.clone(),
        );
    }
    mapped
}

/// Returns the part of `path` before the first `separator`, or all of it.
pub fn top_level_field(path: &str, separator: char) -> &str {
    path.split_once(separator).map_or(path, |(head, _)| head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_errors_strips_subpath() {
        let raw = vec![
            RawFieldError::new("name", "Required"),
            RawFieldError::new("price:amount", "Invalid"),
        ];
        let errors = map_errors(Some(raw.as_slice()));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name").map(String::as_str), Some("Required"));
        assert_eq!(errors.get("price").map(String::as_str), Some("Invalid"));
    }

    #[test]
    fn test_map_errors_last_entry_wins() {
        let raw = vec![RawFieldError::new("x", "A"), RawFieldError::new("x", "B")];
        let errors = map_errors(Some(raw.as_slice()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["x"], "B");
    }

    #[test]
    fn test_map_errors_compound_keys_collapse() {
        let raw = vec![
            RawFieldError::new("variants:0:sku", "Duplicate SKU"),
            RawFieldError::new("variants:1:price", "Too low"),
        ];
        let errors = map_errors(Some(raw.as_slice()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["variants"], "Too low");
    }

    #[test]
    fn test_map_errors_empty_and_absent() {
        let empty: Vec<RawFieldError> = Vec::new();
        assert!(map_errors(Some(empty.as_slice())).is_empty());
        assert!(map_errors(None).is_empty());
    }

    #[test]
    fn test_map_errors_with_custom_separator() {
        let raw = vec![RawFieldError::new("price.amount", "Invalid")];
        let errors = map_errors_with(Some(raw.as_slice()), '.');
        assert_eq!(errors["price"], "Invalid");
        // The default separator leaves the key whole.
        assert_eq!(map_errors(Some(raw.as_slice()))["price.amount"], "Invalid");
    }

    #[test]
    fn test_top_level_field() {
        assert_eq!(top_level_field("name", ':'), "name");
        assert_eq!(top_level_field("price:amount", ':'), "price");
        assert_eq!(top_level_field(":orphan", ':'), "");
        assert_eq!(top_level_field("", ':'), "");
    }

    #[test]
    fn test_raw_field_error_deserializes() {
        let raw: Vec<RawFieldError> = serde_json::from_str(
            r#"[{"field": "startDate", "message": "Enter a valid date."}]"#,
        )
        .unwrap();
        assert_eq!(raw[0], RawFieldError::new("startDate", "Enter a valid date."));
    }
}
