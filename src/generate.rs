//! Generate and schema-check command handlers.

use anyhow::Context;
use seed_core::SeedSchema;
use seed_script::{GenerateArgs, PopulateMetrics, ScriptPopulator};
use serde::Serialize;
use std::path::Path;

/// Built-in `stores` schema, used when no schema file is given.
pub const DEFAULT_SCHEMA_YAML: &str = include_str!("../schemas/stores.yaml");

/// Seed used when neither the CLI nor the schema provides one.
pub const DEFAULT_SEED: u64 = 42;

/// Per-table metrics report, written as JSON for CI tooling.
#[derive(Debug, Serialize)]
pub struct MetricsReport {
    /// Table the script was generated for
    pub table: String,
    /// Number of insert lines written
    pub rows_written: u64,
    /// Total bytes written
    pub bytes_written: u64,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
    /// Generation throughput
    pub rows_per_second: f64,
}

impl MetricsReport {
    fn new(table: &str, metrics: &PopulateMetrics) -> Self {
        Self {
            table: table.to_string(),
            rows_written: metrics.rows_written,
            bytes_written: metrics.bytes_written,
            duration_ms: metrics.total_duration.as_millis() as u64,
            rows_per_second: metrics.rows_per_second(),
        }
    }
}

/// Load a schema from the given path, falling back to the built-in
/// `stores` schema when no path is given.
pub fn load_schema(path: Option<&Path>) -> anyhow::Result<SeedSchema> {
    match path {
        Some(path) => SeedSchema::from_file(path)
            .with_context(|| format!("Failed to load schema from {path:?}")),
        None => SeedSchema::from_yaml(DEFAULT_SCHEMA_YAML).context("Built-in schema is invalid"),
    }
}

/// Pick the effective seed: CLI override, then schema seed, then default.
fn resolve_seed(cli_seed: Option<u64>, schema: &SeedSchema) -> u64 {
    cli_seed.or(schema.seed).unwrap_or(DEFAULT_SEED)
}

/// Run the generate command.
///
/// With `--output-dir`, one `<table>.dbms` script file is written per table;
/// otherwise scripts stream to stdout (diagnostics stay on stderr).
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = load_schema(args.common.schema.as_deref())?;
    let seed = resolve_seed(args.common.seed, &schema);

    let tables: Vec<String> = if args.common.tables.is_empty() {
        schema.table_names().iter().map(|s| s.to_string()).collect()
    } else {
        args.common.tables.clone()
    };

    tracing::info!(
        "Generating {} rows per table (seed={})",
        args.common.row_count,
        seed
    );

    if args.common.dry_run {
        tracing::info!("Running in dry-run mode - no scripts will be written");
        for table_name in &tables {
            let populator = ScriptPopulator::new(schema.clone(), seed);
            populator
                .validate_table(table_name)
                .with_context(|| format!("Validation failed for table '{table_name}'"))?;
            tracing::info!("Table '{}' validates against the script format", table_name);
        }
        return Ok(());
    }

    let mut reports = Vec::new();

    match &args.output_dir {
        Some(output_dir) => {
            std::fs::create_dir_all(output_dir)
                .with_context(|| format!("Failed to create output directory {output_dir:?}"))?;

            for table_name in &tables {
                // Fresh populator per table so every table's row index starts at 0
                let mut populator = ScriptPopulator::new(schema.clone(), seed);
                let output_path = output_dir.join(format!("{table_name}.dbms"));
                let metrics = populator
                    .populate(table_name, &output_path, args.common.row_count)
                    .with_context(|| format!("Failed to generate script for '{table_name}'"))?;

                tracing::info!(
                    "Generated {:?}: {} rows in {:?}",
                    output_path,
                    metrics.rows_written,
                    metrics.total_duration
                );
                reports.push(MetricsReport::new(table_name, &metrics));
            }
        }
        None => {
            let stdout = std::io::stdout();
            for table_name in &tables {
                let mut populator = ScriptPopulator::new(schema.clone(), seed);
                let metrics = populator
                    .write_script(table_name, stdout.lock(), args.common.row_count)
                    .with_context(|| format!("Failed to generate script for '{table_name}'"))?;
                reports.push(MetricsReport::new(table_name, &metrics));
            }
        }
    }

    if let Some(metrics_path) = &args.emit_metrics {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(metrics_path, json)
            .with_context(|| format!("Failed to write metrics to {metrics_path:?}"))?;
        tracing::info!("Wrote metrics report to {:?}", metrics_path);
    }

    tracing::info!("Generate completed successfully");
    Ok(())
}

/// Run the schema command: parse, validate, and summarize a schema.
pub fn run_schema_check(path: Option<&Path>) -> anyhow::Result<()> {
    let schema = load_schema(path)?;

    let populator = ScriptPopulator::new(schema.clone(), DEFAULT_SEED);
    for table in &schema.tables {
        populator
            .validate_table(&table.name)
            .with_context(|| format!("Validation failed for table '{}'", table.name))?;
        tracing::info!(
            "Table '{}': {} attributes ({})",
            table.name,
            1 + table.fields.len(),
            table.attribute_names().join(", ")
        );
    }

    tracing::info!("Schema OK: {} table(s)", schema.tables.len());
    Ok(())
}
