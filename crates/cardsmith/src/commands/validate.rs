//! `cardsmith validate` - check submitted values against stored fields

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Result, bail};
use cardsmith_core::fields::{FieldError, form_values, validate_values};
use cardsmith_core::store::FieldStore;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ValidateOutput {
    valid: bool,
    errors: Vec<FieldError>,
}

/// Run validate command; fails when any value is invalid
///
/// Omitted fields are checked with their stored default.
pub fn run(values_path: &Path, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let submitted = super::read_values(values_path)?;
    let fields = ctx.store().load_fields(ctx.template_id())?;

    let errors = validate_values(&fields, &form_values(&fields, &submitted));
    let count = errors.len();

    if json {
        print_json(&ValidateOutput {
            valid: errors.is_empty(),
            errors,
        })?;
    } else if errors.is_empty() {
        println!(
            "{} {} field(s) valid",
            "✓".green().bold(),
            fields.len()
        );
    } else {
        print_errors(&errors);
    }

    if count > 0 {
        bail!("{} field(s) failed validation", count);
    }
    Ok(())
}

pub(crate) fn print_errors(errors: &[FieldError]) {
    for error in errors {
        println!("{} {}: {}", "✗".red(), error.field_id.bold(), error.message);
    }
}
