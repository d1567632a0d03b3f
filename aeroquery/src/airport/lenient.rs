//! Forgiving deserializers for loosely typed feature properties.
//!
//! Source data mixes strings and numbers freely (`"size": "4000"`,
//! `"services": 3`). These helpers coerce what they can and map everything
//! else to `None` instead of failing the whole feature.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings (non-blank) and numbers are accepted.
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

/// Numeric field: finite numbers and numeric strings are accepted.
pub(super) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_number))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn value_to_number(value: Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
