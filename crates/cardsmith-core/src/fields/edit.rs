//! Metadata edits to a stored field

use super::{parse_options_text, FieldDef, FieldType};
use crate::error::{CardsmithError, Result};

/// Changes to one field's metadata; `None` leaves a property unchanged
///
/// The field id is never editable: it is tied to the placeholder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldEdit {
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: Option<bool>,
    /// Empty text clears the default
    pub default_value: Option<String>,
    /// One option per line; blank text clears the options
    pub options_text: Option<String>,
    /// Empty text clears the help text
    pub help_text: Option<String>,
    pub order_index: Option<i64>,
}

impl FieldEdit {
    pub fn is_empty(&self) -> bool {
        *self == FieldEdit::default()
    }

    /// Apply to `field`, leaving it untouched when the edit is rejected
    ///
    /// Rejects a blank label, and options on a field whose (new) type
    /// takes none.
    pub fn apply(&self, field: &mut FieldDef) -> Result<()> {
        if self.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(invalid(field, "label cannot be blank".to_string()));
        }

        let field_type = self.field_type.unwrap_or(field.field_type);
        let options = self.options_text.as_deref().map(parse_options_text);
        if matches!(options, Some(Some(_))) && !field_type.has_options() {
            return Err(invalid(
                field,
                format!("{} fields take no options", field_type),
            ));
        }

        if let Some(label) = &self.label {
            field.label = label.trim().to_string();
        }
        field.field_type = field_type;
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(default_value) = &self.default_value {
            field.default_value = non_empty(default_value);
        }
        if let Some(options) = options {
            field.options = options;
        }
        if let Some(help_text) = &self.help_text {
            field.help_text = non_empty(help_text);
        }
        if let Some(order_index) = self.order_index {
            field.order_index = order_index;
        }
        Ok(())
    }
}

fn invalid(field: &FieldDef, reason: String) -> CardsmithError {
    CardsmithError::FieldInvalidEdit {
        field_id: field.field_id.clone(),
        reason,
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
