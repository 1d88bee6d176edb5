//! `cardsmith infer` - default definition for a field id

use crate::output::print_json;
use anyhow::Result;
use cardsmith_core::fields::infer_default_field_def;
use cardsmith_core::template::is_valid_field_id;
use colored::Colorize;

pub fn run(field_id: &str, json: bool) -> Result<()> {
    if !is_valid_field_id(field_id) {
        eprintln!(
            "{} '{}' is not a valid placeholder id ([A-Za-z0-9_]+); it will never be extracted",
            "!".yellow(),
            field_id
        );
    }

    let def = infer_default_field_def(field_id);
    if json {
        return print_json(&def);
    }

    println!("{}", def.field_id.bold());
    println!("  Label:       {}", def.label);
    println!("  Type:        {}", def.field_type);
    println!("  Required:    {}", def.required);
    if let Some(placeholder) = &def.placeholder {
        println!("  Placeholder: {}", placeholder);
    }

    Ok(())
}
