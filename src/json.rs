//! JSON interop for heterogeneous sequences.
//!
//! Supported input: a single JSON array of scalars, e.g. `[null, 1, "a", 2]`.
//! Conversion is in-memory only and element-by-element; an element that
//! cannot be represented as a [`Value`] fails with an error carrying its
//! index and raw snippet, and no partial output is returned.

use crate::error::{SequenceError, SequenceResult};
use crate::types::Value;

/// Parse a JSON array string into a sequence of [`Value`]s.
///
/// The top-level JSON value must be an array; anything else is rejected
/// before any element conversion happens.
///
/// # Examples
///
/// ```rust
/// use sequence_processing::json::values_from_json_str;
/// use sequence_processing::types::Value;
///
/// # fn main() -> Result<(), sequence_processing::SequenceError> {
/// let items = values_from_json_str(r#"[null, 1, "a", 2]"#)?;
/// assert_eq!(
///     items,
///     vec![
///         Value::Null,
///         Value::Int64(1),
///         Value::Utf8("a".to_string()),
///         Value::Int64(2),
///     ]
/// );
/// # Ok(())
/// # }
/// ```
pub fn values_from_json_str(input: &str) -> SequenceResult<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SequenceError::InvalidArgument {
            message: "json input is empty".to_string(),
        });
    }

    let v = serde_json::from_str::<serde_json::Value>(trimmed)?;
    match v {
        serde_json::Value::Array(items) => values_from_json(&items),
        _ => Err(SequenceError::InvalidArgument {
            message: "expected a json array at the top level".to_string(),
        }),
    }
}

/// Convert already-parsed JSON array elements into a sequence of [`Value`]s.
pub fn values_from_json(items: &[serde_json::Value]) -> SequenceResult<Vec<Value>> {
    let mut values = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        values.push(convert_json_value(index, item)?);
    }
    Ok(values)
}

/// Convert a single [`Value`] into its JSON representation.
///
/// Non-finite floats (NaN, infinities) have no JSON representation and map
/// to JSON `null`, matching `serde_json`'s own `f64` conversion.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Int64(n) => serde_json::Value::from(*n),
        Value::Float64(f) => serde_json::Value::from(*f),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Utf8(s) => serde_json::Value::String(s.clone()),
    }
}

/// Serialize a sequence of [`Value`]s as a JSON array string.
pub fn values_to_json_string(values: &[Value]) -> SequenceResult<String> {
    let items = serde_json::Value::Array(values.iter().map(value_to_json).collect());
    Ok(serde_json::to_string(&items)?)
}

fn convert_json_value(index: usize, v: &serde_json::Value) -> SequenceResult<Value> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::String(s) => Ok(Value::Utf8(s.clone())),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int64(i))
            } else if let Some(f) = n.as_f64() {
                // Covers JSON floats and u64 values beyond i64::MAX.
                Ok(Value::Float64(f))
            } else {
                Err(SequenceError::ParseError {
                    index,
                    raw: v.to_string(),
                    message: "unrepresentable number".to_string(),
                })
            }
        }
        serde_json::Value::Array(_) => Err(SequenceError::ParseError {
            index,
            raw: v.to_string(),
            message: "nested arrays are not supported".to_string(),
        }),
        serde_json::Value::Object(_) => Err(SequenceError::ParseError {
            index,
            raw: v.to_string(),
            message: "nested objects are not supported".to_string(),
        }),
    }
}
