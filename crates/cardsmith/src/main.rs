mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract { html, json } => commands::extract::run(html, json, cli.verbose),
        Commands::Infer { field_id, json } => commands::infer::run(&field_id, json),
        Commands::Sync { dry_run, json } => commands::sync::run(dry_run, json, cli.verbose),
        Commands::Fields { json } => commands::fields::run(json, cli.verbose),
        Commands::Edit {
            field_id,
            label,
            field_type,
            required,
            optional,
            default_value,
            options_file,
            help_text,
            order_index,
            json,
        } => commands::edit::run(
            commands::edit::EditArgs {
                field_id,
                label,
                field_type,
                required,
                optional,
                default_value,
                options_file,
                help_text,
                order_index,
                json,
            },
            cli.verbose,
        ),
        Commands::Validate { values, json } => commands::validate::run(&values, json, cli.verbose),
        Commands::Render {
            values,
            output,
            check,
            download,
        } => commands::render::run(
            commands::render::RenderArgs {
                values,
                output,
                check,
                download,
            },
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
