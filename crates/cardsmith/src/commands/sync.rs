//! `cardsmith sync` - reconcile stored fields with the template HTML

use crate::context::Context;
use crate::output::print_json;
use anyhow::Result;
use cardsmith_core::store::{SyncPlan, SyncReport, plan_sync, sync_template_fields};
use colored::Colorize;

/// Run sync command
///
/// # Arguments
///
/// * `dry_run` - Only report what would change
/// * `json` - Print the plan or report as JSON
/// * `verbose` - Show store location and unchanged fields
pub fn run(dry_run: bool, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(verbose)?;
    let html = ctx.project.read_html()?;
    let mut store = ctx.store();

    if ctx.verbose {
        println!("{} Store: {}", "→".cyan(), store.path().display());
    }

    if dry_run {
        let plan = plan_sync(&store, ctx.template_id(), &html)?;
        if json {
            return print_json(&plan);
        }
        print_plan(&plan);
        return Ok(());
    }

    let report = sync_template_fields(&mut store, ctx.template_id(), &html)?;
    if json {
        return print_json(&report);
    }
    print_report(&report, ctx.verbose);

    Ok(())
}

fn print_plan(plan: &SyncPlan) {
    super::print_rejected(&plan.rejected);

    if plan.is_noop() {
        println!("{} Fields already in sync", "✓".green().bold());
        return;
    }

    println!(
        "{} Would sync template '{}' (version {} → {})",
        "→".cyan(),
        plan.template_id,
        plan.current_version,
        plan.next_version()
    );
    for def in &plan.to_create {
        println!("  {} {} ({})", "+".green(), def.field_id, def.field_type);
    }
    for field in &plan.to_remove {
        println!("  {} {}", "-".red(), field.field_id);
    }
}

fn print_report(report: &SyncReport, verbose: bool) {
    super::print_rejected(&report.rejected);

    if !report.changed() {
        println!(
            "{} Fields already in sync (version {})",
            "✓".green().bold(),
            report.version
        );
    } else {
        for field in &report.created {
            println!("  {} {} ({})", "+".green(), field.field_id, field.field_type);
        }
        for field in &report.removed {
            println!("  {} {}", "-".red(), field.field_id);
        }
        println!(
            "{} Synced template '{}': {} created, {} removed (version {})",
            "✓".green().bold(),
            report.template_id,
            report.created.len(),
            report.removed.len(),
            report.version
        );
    }

    if verbose {
        println!("{} {} field(s) stored", "→".cyan(), report.fields.len());
    }
}
