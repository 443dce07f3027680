//! Change events delivered by input widgets.
//!
//! Widgets report edits as `{ "target": { "name": ..., "value": ... } }`. The
//! field name arrives as a plain string, so [`FormState`](crate::FormState)
//! checks it against the record at runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The widget-side description of an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeTarget {
    /// The field the widget is bound to.
    pub name: String,
    /// The new raw value. Any shape, including objects for toggle targets.
    pub value: Value,
}

/// A change notification from an input widget.
///
/// # Examples
///
/// ```
/// use dashboard_rs_forms::ChangeEvent;
///
/// let event = ChangeEvent::new("name", "Summer Sale");
/// assert_eq!(event.name(), "name");
/// assert_eq!(event.value(), &serde_json::json!("Summer Sale"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

impl ChangeEvent {
    /// Creates an event for `name` carrying `value`.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.target.name
    }

    pub fn value(&self) -> &Value {
        &self.target.value
    }
}
