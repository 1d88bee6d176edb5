//! Default field definition inference for newly discovered placeholders

use super::{FieldDef, FieldType};
use serde::Serialize;

/// Default definition for a placeholder that has no stored field yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFieldDef {
    pub field_id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl NewFieldDef {
    /// Turn the defaults into an unpersisted field of `template_id`
    pub fn into_field_def(self, template_id: &str, order_index: i64) -> FieldDef {
        FieldDef {
            id: None,
            template_id: template_id.to_string(),
            field_id: self.field_id,
            label: self.label,
            field_type: self.field_type,
            required: self.required,
            placeholder: self.placeholder,
            default_value: None,
            options: None,
            help_text: None,
            order_index,
        }
    }
}

/// Human label from a field id: `guest_full_name` → `Guest Full Name`
///
/// Each underscore-separated segment gets an uppercase first character;
/// the rest of the segment is kept as is.
pub fn derive_label(field_id: &str) -> String {
    field_id
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Infer a default definition from the shape of a field id
///
/// Type is chosen by case-sensitive substring match, first rule wins:
/// email, phone/tel, number/age/quantity, date/birth, description/message/address,
/// otherwise text.
pub fn infer_default_field_def(field_id: &str) -> NewFieldDef {
    let label = derive_label(field_id);
    let has = |needles: &[&str]| needles.iter().any(|n| field_id.contains(n));

    let (field_type, placeholder) = if has(&["email"]) {
        (FieldType::Email, Some("example@email.com".to_string()))
    } else if has(&["phone", "tel"]) {
        (FieldType::Tel, Some("+1234567890".to_string()))
    } else if has(&["number", "age", "quantity"]) {
        (FieldType::Number, Some("0".to_string()))
    } else if has(&["date", "birth"]) {
        (FieldType::Date, None)
    } else if has(&["description", "message", "address"]) {
        (
            FieldType::Textarea,
            Some(format!("Enter {}", label.to_lowercase())),
        )
    } else {
        (FieldType::Text, None)
    };

    NewFieldDef {
        field_id: field_id.to_string(),
        label,
        field_type,
        required: true,
        placeholder,
    }
}
