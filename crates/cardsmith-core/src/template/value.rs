//! Runtime field values supplied at render time

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from `field_id` to the value substituted for `{{field_id}}`
pub type ValueMap = HashMap<String, FieldValue>;

/// A runtime value for one field
///
/// Deserializes directly from JSON: `null`, booleans, numbers, strings, and
/// arrays of strings (multi-select checkboxes).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// String form used during substitution
    ///
    /// `Null` and `Flag(false)` render empty, `Flag(true)` renders `"true"`,
    /// lists are joined with `list_separator`.
    pub fn to_display(&self, list_separator: &str) -> String {
        match self {
            FieldValue::Null | FieldValue::Flag(false) => String::new(),
            FieldValue::Flag(true) => "true".to_string(),
            FieldValue::Number(n) => format_number(n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(list_separator),
        }
    }

    /// True when the value counts as "not provided" for required checks
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null | FieldValue::Flag(false) => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Flag(true) | FieldValue::Number(_) => false,
        }
    }
}

/// Integral floats print as plain integers (`3.0` → `3`, `1e16` →
/// `10000000000000000`) up to `1e21`; larger magnitudes and fractions keep
/// their shortest form (`1e21`, `0.25`).
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f}")
            }
        }
        _ => n.to_string(),
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}
