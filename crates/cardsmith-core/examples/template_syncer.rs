//! Syncs one template against an HTML file, repeatedly
//!
//! Usage: template_syncer <store_path> <template_id> <html_path> <rounds>

use cardsmith_core::store::{sync_template_fields, JsonFieldStore};
use std::env;

fn main() -> cardsmith_core::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        eprintln!("Usage: template_syncer <store_path> <template_id> <html_path> <rounds>");
        std::process::exit(1);
    }

    let mut store = JsonFieldStore::new(&args[1]);
    let template_id = &args[2];
    let html = std::fs::read_to_string(&args[3])?;
    let rounds: usize = args[4].parse().expect("rounds must be a number");

    let mut created = 0;
    for _ in 0..rounds {
        created += sync_template_fields(&mut store, template_id, &html)?.created.len();
    }

    println!("created {created} fields");
    Ok(())
}
