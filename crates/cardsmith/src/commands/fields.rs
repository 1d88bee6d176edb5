//! `cardsmith fields` - stored field definitions

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use cardsmith_core::fields::FieldDef;
use cardsmith_core::store::FieldStore;
use colored::Colorize;

pub fn run(json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let fields = ctx.store().load_fields(ctx.template_id())?;

    if json {
        return print_json(&fields);
    }

    if fields.is_empty() {
        println!(
            "{} No fields stored for '{}' (run `cardsmith sync`)",
            "!".yellow(),
            ctx.template_id()
        );
        return Ok(());
    }

    for field in &fields {
        print_field(field, verbose);
    }

    Ok(())
}

/// One summary line, plus help text and options when `verbose`
pub(crate) fn print_field(field: &FieldDef, verbose: bool) {
    let required = if field.required {
        "required".normal()
    } else {
        "optional".dimmed()
    };
    println!(
        "{:>3}  {:<24} {:<9} {}  {}",
        field.order_index,
        field.field_id.bold(),
        field.field_type.as_str(),
        required,
        field.label
    );
    if !verbose {
        return;
    }

    if let Some(default) = &field.default_value {
        println!("       default: {}", default);
    }
    if let Some(help) = &field.help_text {
        println!("       {}", help.dimmed());
    }
    let options: Vec<String> = field
        .options
        .iter()
        .flatten()
        .map(|option| match (option.label(), option.value()) {
            (label, value) if label == value => label.to_string(),
            (label, value) => format!("{} ({})", label, value),
        })
        .collect();
    if !options.is_empty() {
        println!("       options: {}", options.join(", "));
    }
}
