//! Field definitions - presentation metadata for template placeholders
//!
//! Each `{{field_id}}` placeholder in a template's HTML has at most one
//! [`FieldDef`] describing how the storefront form collects its value.
//! Only a field's existence is synchronized with the HTML ([`diff_fields`]);
//! label, type, and the rest change through a [`FieldEdit`].

pub mod edit;
pub mod infer;
pub mod options;
pub mod sync;
pub mod validate;

pub use edit::FieldEdit;
pub use infer::{derive_label, infer_default_field_def, NewFieldDef};
pub use options::{parse_options_text, FieldOption};
pub use sync::{diff_fields, FieldChangeset, FieldRef, SyncedField};
pub use validate::{form_values, initial_values, validate_values, FieldError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    #[serde(alias = "phone")]
    Tel,
    Number,
    Date,
    Textarea,
    Select,
    Checkbox,
}

impl FieldType {
    pub const ALL: [FieldType; 8] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Tel,
        FieldType::Number,
        FieldType::Date,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
    ];

    /// Lowercase tag as stored and displayed
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
        }
    }

    /// Whether the field offers a list of options
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Checkbox)
    }
}

/// Parses the stored tag, case-insensitively; `phone` means `tel`
impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        if tag == "phone" {
            return Ok(FieldType::Tel);
        }
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| {
                let known: Vec<&str> = FieldType::ALL.iter().map(FieldType::as_str).collect();
                format!("unknown field type '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field definition as persisted per template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Persisted identity; `None` until the store assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub template_id: String,
    /// Placeholder identifier, unique within the template
    pub field_id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub order_index: i64,
}

impl FieldDef {
    /// Label for messages, falling back to the field id
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.field_id
        } else {
            &self.label
        }
    }
}

/// Sort fields into display order: `order_index`, then `field_id`
pub fn sort_for_display(fields: &mut [FieldDef]) {
    fields.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.field_id.cmp(&b.field_id))
    });
}
