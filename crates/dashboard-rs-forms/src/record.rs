//! Name-based field access for typed form records.
//!
//! Widgets address fields by string name while the form data is a concrete
//! Rust type. [`FormRecord`] bridges the two through the record's JSON object
//! representation: reads serialize the record, writes replace one key and
//! deserialize it back. A plain `serde_json::Map<String, Value>` qualifies, as
//! does any struct that serializes every one of its form fields.
//!
//! The serialized keys are the record's field names. A field serde leaves out
//! of the output (`#[serde(skip)]`, or `skip_serializing_if` while the
//! condition holds) is not addressable and is reported as unknown.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use dashboard_rs_core::{FormError, FormResult};

/// A record whose fields can be read and replaced by name.
///
/// `T` must serialize to a JSON object and emit a key for every field a widget
/// may edit. Keys that serde omits are treated as unknown fields.
pub trait FormRecord: Clone + PartialEq + Sized {
    /// Returns the record as a map of field name to value.
    fn to_fields(&self) -> FormResult<Map<String, Value>>;

    /// Rebuilds a record from a field map.
    fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error>;

    /// Returns the current value of `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<Value> {
        self.to_fields().ok()?.remove(name)
    }

    /// Returns `true` if `name` is a key of this record.
    fn has_field(&self, name: &str) -> bool {
        self.to_fields()
            .is_ok_and(|fields| fields.contains_key(name))
    }

    /// Returns a copy of this record with `name` replaced by `value`.
    ///
    /// Never adds a key: naming a field the record lacks is an error.
    fn with_field(&self, name: &str, value: Value) -> FormResult<Self> {
        let mut fields = self.to_fields()?;
        let slot = fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        *slot = value;
        Self::from_fields(fields).map_err(|source| FormError::InvalidValue {
            field: name.to_string(),
            source,
        })
    }
}

impl<T> FormRecord for T
where
    T: Serialize + DeserializeOwned + Clone + PartialEq,
{
    fn to_fields(&self) -> FormResult<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            other => Err(FormError::NotARecord(describe(&other).to_string())),
        }
    }

    fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(fields))
    }
}

const fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
