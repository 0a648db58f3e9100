//! Command-line interface for dbseed
//!
//! # Usage Examples
//!
//! ```bash
//! # Stream the canonical stores script (5000 inserts) to stdout
//! dbseed generate
//!
//! # Custom schema, row count, and seed, written to files
//! dbseed generate \
//!   --schema schemas/stores.yaml \
//!   --row-count 1000 \
//!   --seed 7 \
//!   --output-dir out/
//!
//! # Validate a schema without generating anything
//! dbseed schema --schema schemas/stores.yaml
//! ```
//!
//! Diagnostics go to stderr (controlled by `RUST_LOG`), so stdout stays a
//! clean script stream suitable for piping straight into the consumer tool.

use clap::{Parser, Subcommand};
use dbseed::generate::{run_generate, run_schema_check};
use seed_script::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbseed")]
#[command(about = "A tool for generating seed scripts for a flat-file DBMS")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate seed scripts (create block, insert lines, exit) from a schema
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Parse and validate a schema file, printing a summary
    Schema {
        /// Path to schema YAML file (omit to check the built-in stores schema)
        #[arg(long, short = 's')]
        schema: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays a script stream
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
        Commands::Schema { schema } => run_schema_check(schema.as_deref()),
    }
}
