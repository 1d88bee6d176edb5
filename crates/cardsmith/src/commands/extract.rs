//! `cardsmith extract` - list placeholders in template HTML

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Context as _, Result};
use cardsmith_core::template::{
    RejectedPlaceholder, TokenStream, extract_placeholders, find_rejected_placeholders,
};
use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct ExtractOutput {
    source: String,
    placeholders: Vec<String>,
    /// Line of each placeholder's first occurrence
    first_lines: HashMap<String, usize>,
    rejected: Vec<RejectedPlaceholder>,
}

fn first_lines(html: &str) -> HashMap<String, usize> {
    let mut lines = HashMap::new();
    for token in TokenStream::new(html) {
        lines
            .entry(token.field_id.to_string())
            .or_insert(token.line);
    }
    lines
}

/// Run extract command
///
/// Scans `html` when given, otherwise the template of the current project.
pub fn run(html: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let (source, content) = match html {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (path, content)
        }
        None => {
            let ctx = Context::new(verbose)?;
            (ctx.project.html_path(), ctx.project.read_html()?)
        }
    };

    let output = ExtractOutput {
        source: source.display().to_string(),
        placeholders: extract_placeholders(&content),
        first_lines: first_lines(&content),
        rejected: find_rejected_placeholders(&content),
    };

    if json {
        return print_json(&output);
    }

    println!(
        "{} {} placeholder(s) in {}",
        "→".cyan(),
        output.placeholders.len(),
        output.source
    );
    for id in &output.placeholders {
        let line = output.first_lines.get(id).copied().unwrap_or_default();
        println!("  {{{{{}}}}}  {}", id, format!("line {line}").dimmed());
    }
    super::print_rejected(&output.rejected);

    Ok(())
}
