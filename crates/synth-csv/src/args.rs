//! CLI argument definitions for the schema-synth commands.

use clap::Args;
use std::path::PathBuf;

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to the schema table (.csv with names,type,values,primary_key columns, or .yaml)
    #[arg(long, short = 's', env = "SYNTH_SCHEMA")]
    pub schema: PathBuf,

    /// Columns to generate (comma-separated, empty = all columns from the schema)
    #[arg(long, short = 'c', value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Number of rows to generate (1 to 1000000)
    #[arg(long, short = 'n', default_value = "100", env = "SYNTH_ROWS")]
    pub rows: usize,

    /// Random seed for deterministic generation (same seed = same data).
    /// A random seed is chosen and logged when omitted.
    #[arg(long, env = "SYNTH_SEED")]
    pub seed: Option<u64>,

    /// Output CSV file (stdout when omitted)
    #[arg(long, short = 'o', env = "SYNTH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of rows to log as a preview after generation
    #[arg(long, default_value = "5")]
    pub preview: usize,

    /// Omit the header row from the CSV output
    #[arg(long)]
    pub no_header: bool,

    /// Dry-run mode: validate the schema and selection without generating data
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments of the `describe` command.
#[derive(Args, Clone, Debug)]
pub struct DescribeArgs {
    /// Path to the schema table (.csv or .yaml)
    #[arg(long, short = 's', env = "SYNTH_SCHEMA")]
    pub schema: PathBuf,
}
