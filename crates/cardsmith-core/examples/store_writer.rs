//! Inserts fields into a fields.json store one at a time
//!
//! Usage: store_writer <store_path> <template_id> <prefix> <count>
//!
//! Each insert and version bump is a separate locked read-modify-write, so
//! several writers running at once must not lose each other's fields.

use cardsmith_core::fields::infer_default_field_def;
use cardsmith_core::store::{FieldStore, JsonFieldStore};
use std::env;

fn main() -> cardsmith_core::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: store_writer <store_path> <template_id> <prefix> <count>");
        std::process::exit(1);
    }

    let mut store = JsonFieldStore::new(&args[1]);
    let template_id = &args[2];
    let prefix = &args[3];
    let count: usize = args[4].parse().expect("count must be a number");

    for i in 0..count {
        let field = infer_default_field_def(&format!("{prefix}_{i}")).into_field_def(template_id, 0);
        store.insert_fields(template_id, vec![field])?;
        store.bump_version(template_id)?;
    }

    println!("{prefix}: wrote {count} fields");
    Ok(())
}
