//! Selectable options for select and checkbox fields

use serde::{Deserialize, Serialize};

/// One selectable option: either a bare string or a value/label pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOption {
    Plain(String),
    Labeled {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl FieldOption {
    /// Submitted value; a labeled option without a value submits its label
    pub fn value(&self) -> &str {
        match self {
            FieldOption::Plain(s) => s,
            FieldOption::Labeled { value, label } => {
                non_empty(value).or(non_empty(label)).unwrap_or("")
            }
        }
    }

    /// Text shown to the user
    pub fn label(&self) -> &str {
        match self {
            FieldOption::Plain(s) => s,
            FieldOption::Labeled { value, label } => {
                non_empty(label).or(non_empty(value)).unwrap_or("")
            }
        }
    }
}

impl From<&str> for FieldOption {
    fn from(s: &str) -> Self {
        FieldOption::Plain(s.to_string())
    }
}

/// Parse one-option-per-line text, as typed into an editor
///
/// Lines are trimmed and blank lines dropped. Returns `None` when no
/// option remains.
pub fn parse_options_text(text: &str) -> Option<Vec<FieldOption>> {
    let options: Vec<FieldOption> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(FieldOption::from)
        .collect();

    if options.is_empty() {
        None
    } else {
        Some(options)
    }
}
