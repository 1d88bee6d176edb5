//! Template module - placeholder extraction and substitution for HTML templates
//!
//! Templates are authored HTML documents containing `{{field_id}}` placeholders.
//! The module is pure text processing: HTML is never parsed as a DOM and
//! substituted values are inserted verbatim.
//!
//! ## Syntax
//!
//! - Placeholder: `{{field_id}}` where `field_id` is `[A-Za-z0-9_]+`
//! - No whitespace inside the braces: `{{ name }}` is not a placeholder
//! - A placeholder may appear any number of times; every occurrence is substituted
//!
//! ## Operations
//!
//! - [`extract_placeholders`]: distinct identifiers in first-occurrence order
//! - [`find_rejected_placeholders`]: `{{...}}` pairs that fail the grammar (diagnostics)
//! - [`render`]: substitute a [`ValueMap`], leaving unknown placeholders literal

pub mod engine;
pub mod extract;
pub mod value;

pub use engine::{
    is_valid_field_id, render, RenderOptions, TemplateEngine, Token, TokenStream,
    DEFAULT_LIST_SEPARATOR,
};
pub use extract::{extract_placeholders, find_rejected_placeholders, RejectedPlaceholder};
pub use value::{FieldValue, ValueMap};
