//! Command-line interface for schema-synth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # All columns, 100 rows, CSV to stdout
//! schema-synth generate --schema schema.csv
//!
//! # Selected columns, reproducible, written to a file
//! schema-synth generate \
//!   --schema schema.csv \
//!   --columns id,status,created \
//!   --rows 50000 \
//!   --seed 42 \
//!   --output synthetic_data.csv
//!
//! # Validate schema and selection only
//! schema-synth generate --schema schema.yaml --columns id,status --dry-run
//! ```
//!
//! ## Describe
//! ```bash
//! schema-synth describe --schema schema.csv
//! ```
//!
//! Logs go to stderr and are controlled with `RUST_LOG` (default `info`).

use clap::{Parser, Subcommand};
use schema_synth::{run_describe, run_generate};
use synth_csv::{DescribeArgs, GenerateArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-synth")]
#[command(about = "Synthesize tabular test data from a schema table")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic rows for the selected columns and export them as CSV
    Generate(GenerateArgs),

    /// Show how each column's type descriptor is interpreted
    Describe(DescribeArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Stdout may carry CSV output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Describe(args) => run_describe(args),
    }
}
