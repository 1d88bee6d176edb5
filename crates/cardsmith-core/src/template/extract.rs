//! Placeholder extraction and diagnostics

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::engine::{is_valid_field_id, TokenStream};

/// Any `{{...}}` pair without nested braces, valid or not
static BRACE_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("brace pair pattern is valid"));

/// Extract placeholder identifiers from HTML
///
/// Returns each distinct identifier once, in order of first occurrence.
/// Text that does not match `{{[A-Za-z0-9_]+}}` is ignored.
pub fn extract_placeholders(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for token in TokenStream::new(html) {
        if seen.insert(token.field_id) {
            ids.push(token.field_id.to_string());
        }
    }

    ids
}

/// A `{{...}}` pair that looks like a placeholder but is not one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedPlaceholder {
    /// Raw text including braces, e.g. `{{ guest name }}`
    pub raw: String,
    /// Line of the first occurrence (1-based)
    pub line: usize,
    /// Corrected placeholder when trimming whitespace would make it valid
    pub suggestion: Option<String>,
}

/// Find brace pairs whose content fails the identifier grammar
///
/// Reports each distinct raw text once, at its first occurrence.
pub fn find_rejected_placeholders(html: &str) -> Vec<RejectedPlaceholder> {
    let mut seen = HashSet::new();
    let mut rejected = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    for caps in BRACE_PAIR.captures_iter(html) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if is_valid_field_id(content.as_str()) {
            continue;
        }

        line += html[counted_to..whole.start()].matches('\n').count();
        counted_to = whole.start();

        if !seen.insert(whole.as_str()) {
            continue;
        }

        let trimmed = content.as_str().trim();
        let suggestion = is_valid_field_id(trimmed).then(|| format!("{{{{{}}}}}", trimmed));

        rejected.push(RejectedPlaceholder {
            raw: whole.as_str().to_string(),
            line,
            suggestion,
        });
    }

    rejected
}
