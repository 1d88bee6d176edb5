//! Submitted value checks against field definitions

use super::{FieldDef, FieldType};
use crate::template::{FieldValue, ValueMap, DEFAULT_LIST_SEPARATOR};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// One failed check; at most one per field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field_id: String,
    pub message: String,
}

fn check(field: &FieldDef, value: Option<&FieldValue>) -> Option<String> {
    let blank = value.is_none_or(FieldValue::is_blank);
    if blank {
        return field
            .required
            .then(|| format!("{} is required", field.display_label()));
    }

    let text = match value {
        Some(FieldValue::Number(_)) => return None,
        Some(v) => v.to_display(DEFAULT_LIST_SEPARATOR),
        None => return None,
    };
    let text = text.trim();

    match field.field_type {
        FieldType::Email if !EMAIL.is_match(text) => {
            Some("Please enter a valid email address".to_string())
        }
        FieldType::Number if !is_number(text) => Some("Please enter a valid number".to_string()),
        _ => None,
    }
}

fn is_number(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Check `values` against `fields`
///
/// Errors come back in display order (`order_index`, then `field_id`).
/// Blank values fail only the required check; type checks apply to
/// non-blank values.
pub fn validate_values(fields: &[FieldDef], values: &ValueMap) -> Vec<FieldError> {
    let mut ordered: Vec<&FieldDef> = fields.iter().collect();
    ordered.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.field_id.cmp(&b.field_id))
    });

    ordered
        .into_iter()
        .filter_map(|field| {
            check(field, values.get(&field.field_id)).map(|message| FieldError {
                field_id: field.field_id.clone(),
                message,
            })
        })
        .collect()
}

/// Starting values for a form: each field's default, or empty text
pub fn initial_values(fields: &[FieldDef]) -> ValueMap {
    fields
        .iter()
        .map(|field| {
            let value = field.default_value.clone().unwrap_or_default();
            (field.field_id.clone(), FieldValue::Text(value))
        })
        .collect()
}

/// Submitted values laid over [`initial_values`]
///
/// Fields the submission omits keep their default. Submitted keys with no
/// stored field pass through unchanged.
pub fn form_values(fields: &[FieldDef], submitted: &ValueMap) -> ValueMap {
    let mut values = initial_values(fields);
    values.extend(submitted.iter().map(|(k, v)| (k.clone(), v.clone())));
    values
}
