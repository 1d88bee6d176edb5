//! CLI command implementations

pub mod edit;
pub mod extract;
pub mod fields;
pub mod infer;
pub mod render;
pub mod sync;
pub mod validate;

use anyhow::{Context as _, Result};
use cardsmith_core::template::{RejectedPlaceholder, ValueMap};
use colored::Colorize;
use std::path::Path;

/// Load a JSON object of field values
pub(crate) fn read_values(path: &Path) -> Result<ValueMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read values file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON object of field values", path.display()))
}

/// Warn about `{{...}}` text that will not be treated as a placeholder
pub(crate) fn print_rejected(rejected: &[RejectedPlaceholder]) {
    for r in rejected {
        let hint = match &r.suggestion {
            Some(s) => format!(" (did you mean {}?)", s.bold()),
            None => String::new(),
        };
        eprintln!(
            "{} line {}: {} is not a placeholder{}",
            "!".yellow(),
            r.line,
            r.raw,
            hint
        );
    }
}
