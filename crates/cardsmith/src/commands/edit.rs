//! `cardsmith edit` - change a stored field's metadata

use crate::context::Context;
use crate::output::print_json;
use anyhow::{Context as _, Result, bail};
use cardsmith_core::fields::{FieldEdit, FieldType};
use cardsmith_core::store::FieldStore;
use colored::Colorize;
use std::path::PathBuf;

pub struct EditArgs {
    pub field_id: String,
    pub label: Option<String>,
    pub field_type: Option<FieldType>,
    pub required: bool,
    pub optional: bool,
    pub default_value: Option<String>,
    pub options_file: Option<PathBuf>,
    pub help_text: Option<String>,
    pub order_index: Option<i64>,
    pub json: bool,
}

/// Run edit command
///
/// The field must already be stored (run `cardsmith sync` first). The
/// options file holds one option per line.
pub fn run(args: EditArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;

    let options_text = match &args.options_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file {}", path.display()))?,
        ),
        None => None,
    };
    let required = match (args.required, args.optional) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let edit = FieldEdit {
        label: args.label,
        field_type: args.field_type,
        required,
        default_value: args.default_value,
        options_text,
        help_text: args.help_text,
        order_index: args.order_index,
    };
    if edit.is_empty() {
        bail!("Nothing to change for '{}'", args.field_id);
    }

    let mut store = ctx.store();
    let field = store.edit_field(ctx.template_id(), &args.field_id, &edit)?;

    if args.json {
        return print_json(&field);
    }

    println!("{} Updated field '{}'", "✓".green().bold(), field.field_id);
    super::fields::print_field(&field, true);
    Ok(())
}
