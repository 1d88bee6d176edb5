//! CLI command structure using clap

use cardsmith_core::fields::FieldType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(version, about = "Keep template fields in sync with their HTML and render cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the placeholders found in template HTML
    Extract {
        /// HTML file to scan instead of the project template
        #[arg(long)]
        html: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// Show the default definition inferred for a field id
    Infer {
        field_id: String,

        #[arg(long)]
        json: bool,
    },

    /// Create and remove stored fields to match the template HTML
    Sync {
        /// Show the changes without applying them
        #[arg(long)]
        dry_run: bool,

        #[arg(long)]
        json: bool,
    },

    /// List stored field definitions in display order
    Fields {
        #[arg(long)]
        json: bool,
    },

    /// Change the label, type, default, or options of a stored field
    Edit {
        field_id: String,

        #[arg(long)]
        label: Option<String>,

        /// text, email, tel, number, date, textarea, select, or checkbox
        #[arg(long = "type", value_name = "TYPE")]
        field_type: Option<FieldType>,

        #[arg(long, conflicts_with = "optional")]
        required: bool,

        #[arg(long)]
        optional: bool,

        /// Value used when a submission omits the field ("" clears it)
        #[arg(long = "default", value_name = "TEXT")]
        default_value: Option<String>,

        /// File with one option per line, for select and checkbox fields
        #[arg(long, value_name = "FILE")]
        options_file: Option<PathBuf>,

        /// Hint shown with the field ("" clears it)
        #[arg(long, value_name = "TEXT")]
        help_text: Option<String>,

        /// Display position
        #[arg(long = "order", value_name = "N", allow_negative_numbers = true)]
        order_index: Option<i64>,

        #[arg(long)]
        json: bool,
    },

    /// Check a JSON value map against the stored fields
    Validate {
        /// JSON object mapping field ids to values
        #[arg(long)]
        values: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Render the template with a JSON value map
    Render {
        /// JSON object mapping field ids to values
        #[arg(long)]
        values: PathBuf,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE", conflicts_with = "download")]
        output: Option<PathBuf>,

        /// Validate the values first and refuse to render on errors
        #[arg(long)]
        check: bool,

        /// Write to <template name>.html in the current directory
        #[arg(long)]
        download: bool,
    },
}
