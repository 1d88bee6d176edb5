//! Template engine implementation

mod tokenize;

pub use tokenize::{is_valid_field_id, Token, TokenStream};

use crate::template::value::{FieldValue, ValueMap};

/// Default join rule for list values (matches the storefront's array coercion)
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Options controlling value stringification during rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Separator placed between the items of a list value
    pub list_separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_separator: DEFAULT_LIST_SEPARATOR.to_string(),
        }
    }
}

/// Template engine for substituting field values into HTML
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    options: RenderOptions,
}

impl TemplateEngine {
    /// Create a new template engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a template engine with explicit options
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the render options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `html`, replacing every `{{key}}` whose key is present in `values`
    ///
    /// Tokens whose key is absent stay literal. The scan is a single pass over
    /// the original HTML: substituted text is never re-scanned, so the output
    /// does not depend on the order of keys. No escaping is applied.
    pub fn render(&self, html: &str, values: &ValueMap) -> String {
        if values.is_empty() {
            return html.to_string();
        }

        let mut output = String::with_capacity(html.len());
        let mut copied = 0;
        let mut pos = 0;
        // Cached position of the next `}}`; only ever moves forward
        let mut next_close: Option<usize> = None;

        while let Some(offset) = html[pos..].find("{{") {
            let open = pos + offset;
            let content_start = open + 2;

            let close = match next_close {
                Some(close) if close >= content_start => close,
                _ => match html[content_start..].find("}}") {
                    Some(rel) => content_start + rel,
                    None => break,
                },
            };
            next_close = Some(close);

            match values.get(&html[content_start..close]) {
                Some(value) => {
                    output.push_str(&html[copied..open]);
                    output.push_str(&self.stringify(value));
                    pos = close + 2;
                    copied = pos;
                }
                None => pos = open + 1,
            }
        }

        output.push_str(&html[copied..]);
        output
    }

    /// Stringify one value with this engine's options
    pub fn stringify(&self, value: &FieldValue) -> String {
        value.to_display(&self.options.list_separator)
    }
}

/// Convenience function to render with default options
pub fn render(html: &str, values: &ValueMap) -> String {
    TemplateEngine::new().render(html, values)
}

#[cfg(test)]
mod tests;
