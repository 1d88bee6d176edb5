//! `cardsmith render` - fill the template with values

use crate::context::Context;
use crate::output::print_raw;
use anyhow::{Context as _, Result, bail};
use cardsmith_core::fields::{form_values, validate_values};
use cardsmith_core::store::FieldStore;
use cardsmith_core::template::extract_placeholders;
use colored::Colorize;
use std::path::PathBuf;

pub struct RenderArgs {
    pub values: PathBuf,
    pub output: Option<PathBuf>,
    pub check: bool,
    pub download: bool,
}

/// Run render command
///
/// Stored defaults fill fields the values file omits. Unknown placeholders
/// stay in the output literally. The rendered HTML goes to stdout unless
/// `--output` or `--download` names a file.
pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let html = ctx.project.read_html()?;
    let submitted = super::read_values(&args.values)?;
    let fields = ctx.store().load_fields(ctx.template_id())?;
    let values = form_values(&fields, &submitted);

    if args.check {
        let errors = validate_values(&fields, &values);
        if !errors.is_empty() {
            super::validate::print_errors(&errors);
            bail!("{} field(s) failed validation; nothing rendered", errors.len());
        }
    }

    let unfilled: Vec<String> = extract_placeholders(&html)
        .into_iter()
        .filter(|id| {
            !submitted.contains_key(id) && values.get(id).is_none_or(|v| v.is_blank())
        })
        .collect();
    if !unfilled.is_empty() {
        eprintln!(
            "{} {} placeholder(s) left unfilled: {}",
            "!".yellow(),
            unfilled.len(),
            unfilled.join(", ")
        );
    }

    let rendered = ctx.engine().render(&html, &values);

    let target = match (args.output, args.download) {
        (Some(path), _) => Some(path),
        (None, true) => Some(std::env::current_dir()?.join(ctx.project.download_file_name())),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green().bold(), path.display());
        }
        None => print_raw(&rendered)?,
    }

    Ok(())
}
