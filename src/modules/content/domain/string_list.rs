//! Canonical handling of the list-valued content fields (`technologies`,
//! `achievements`).
//!
//! These fields have been stored both as native arrays and as JSON text, and
//! request bodies send either form. Everything funnels through
//! [`normalize_string_list`], which never fails: anything it cannot read as an
//! ordered list of strings becomes an empty list.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert any accepted encoding of a string list into the canonical list.
///
/// - array of strings: returned as-is
/// - string: parsed as a JSON array of strings, otherwise empty
/// - null: empty
/// - anything else (objects, numbers, mixed arrays): empty
pub fn normalize_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(encoded) => serde_json::from_str(encoded).unwrap_or_default(),
        other => Vec::<String>::deserialize(other).unwrap_or_default(),
    }
}

/// Canonical write form: a JSON array in a text column.
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Read side of [`encode_string_list`]; a NULL column is an empty list.
pub fn decode_string_list(stored: Option<&str>) -> Vec<String> {
    match stored {
        Some(text) => normalize_string_list(&Value::String(text.to_string())),
        None => Vec::new(),
    }
}

/// `deserialize_with` helper for request bodies. Pair with `#[serde(default)]`
/// so a missing field also ends up empty.
pub fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize_string_list(&raw))
}
