//! Structural equality for field values.
//!
//! Values assigned to form fields are usually fresh objects built by a widget,
//! so membership checks compare them by content. Numbers compare by numeric
//! value, so `1` and `1.0` are the same value here even though their
//! `serde_json` representations differ.

use serde_json::{Number, Value};

/// Returns `true` if `a` and `b` have the same structure and contents.
///
/// Arrays compare element by element in order. Objects compare key by key,
/// ignoring key order.
///
/// # Examples
///
/// ```
/// use dashboard_rs_forms::deep_equal;
/// use serde_json::json;
///
/// assert!(deep_equal(&json!({"id": 1, "name": "a"}), &json!({"name": "a", "id": 1.0})));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| deep_equal(l, r)))
        }
        _ => false,
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
