//! CLI argument definitions for the script populator.

use clap::Args;
use std::path::PathBuf;

/// Common arguments shared by all generating subcommands.
#[derive(Args, Clone, Debug)]
pub struct CommonSeedArgs {
    /// Path to schema YAML file (omit to use the built-in stores schema)
    #[arg(long, short = 's')]
    pub schema: Option<PathBuf>,

    /// Number of records to generate per table
    #[arg(long, default_value = "5000")]
    pub row_count: u64,

    /// Random seed for deterministic generation (same seed = same script);
    /// overrides the schema's seed when given
    #[arg(long)]
    pub seed: Option<u64>,

    /// Specific tables to generate (comma-separated, empty = all tables from schema)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Dry-run mode: validate schema and configuration without generating
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `generate` subcommand.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Output directory for script files, one `<table>.dbms` per table
    /// (omit to stream the script to stdout)
    #[arg(long, short = 'o')]
    pub output_dir: Option<PathBuf>,

    /// Write a JSON metrics report to this file after generation
    #[arg(long, value_name = "PATH")]
    pub emit_metrics: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonSeedArgs,
}
