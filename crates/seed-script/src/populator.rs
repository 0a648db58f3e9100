//! Script populator for seeding the flat-file DBMS.

use crate::error::ScriptError;
use crate::script::{render_create_block, render_insert_line, EXIT_COMMAND};
use seed_core::{FieldType, GeneratorConfig, SeedSchema, TableSpec};
use seed_generator::RecordGenerator;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of insert lines written.
    pub rows_written: u64,
    /// Total bytes written, create block and exit command included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Script populator that generates seed scripts for the consumer DBMS.
pub struct ScriptPopulator {
    schema: SeedSchema,
    generator: RecordGenerator,
}

impl ScriptPopulator {
    /// Create a new script populator.
    ///
    /// # Arguments
    ///
    /// * `schema` - Seed schema defining tables and attribute generators
    /// * `seed` - Random seed for deterministic generation
    pub fn new(schema: SeedSchema, seed: u64) -> Self {
        let generator = RecordGenerator::new(schema.clone(), seed);
        Self { schema, generator }
    }

    /// Set the starting index for generation (for resumable population).
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.generator = std::mem::replace(
            &mut self.generator,
            RecordGenerator::new(self.schema.clone(), 0),
        )
        .with_start_index(index);
        self
    }

    /// Get the current generation index.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &SeedSchema {
        &self.schema
    }

    /// Validate that a table's configured values survive the line format.
    ///
    /// The consumer splits insert payloads on commas and commands on
    /// newlines, so any configured string containing either would corrupt
    /// the stream. Non-scalar pool values have no token form at all, and
    /// fixed pool strings must fit the attribute's declared storage width.
    pub fn validate_table(&self, table_name: &str) -> Result<(), ScriptError> {
        let table_spec = self
            .schema
            .get_table(table_name)
            .ok_or_else(|| ScriptError::TableNotFound(table_name.to_string()))?;

        let check = |attribute: &str, attribute_type: &FieldType, config: &GeneratorConfig| {
            if config.has_non_scalar_values() {
                return Err(ScriptError::Unrepresentable(format!(
                    "attribute '{attribute}' of table '{table_name}' has a non-scalar pool value"
                )));
            }
            for literal in config.literal_strings() {
                if literal.contains(',') || literal.contains('\n') || literal.contains('\r') {
                    return Err(ScriptError::Unrepresentable(format!(
                        "attribute '{attribute}' of table '{table_name}' has a value containing \
                         a comma or newline: {literal:?}"
                    )));
                }
            }
            // Pattern output length depends on the row index, so only fixed
            // pool values are checked against the declared width
            if let (Some(width), GeneratorConfig::OneOf { .. } | GeneratorConfig::Static { .. }) =
                (attribute_type.width(), config)
            {
                for literal in config.literal_strings() {
                    if literal.len() > width as usize {
                        return Err(ScriptError::Unrepresentable(format!(
                            "attribute '{attribute}' of table '{table_name}' has a value longer \
                             than its declared width {width}: {literal:?}"
                        )));
                    }
                }
            }
            Ok(())
        };

        check(&table_spec.id.name, &table_spec.id.id_type, &table_spec.id.generator)?;
        for field in &table_spec.fields {
            check(&field.name, &field.field_type, &field.generator)?;
        }
        Ok(())
    }

    /// Write a complete seed script into the given writer.
    ///
    /// Emits the create block, `count` insert lines, and the exit command.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn write_script<W: Write>(
        &mut self,
        table_name: &str,
        mut writer: W,
        count: u64,
    ) -> Result<PopulateMetrics, ScriptError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        self.validate_table(table_name)?;
        let table_spec: TableSpec = self
            .schema
            .get_table(table_name)
            .ok_or_else(|| ScriptError::TableNotFound(table_name.to_string()))?
            .clone();

        info!(
            "Generating seed script for table '{}' with {} rows",
            table_name, count
        );

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        // Schema definition block first, then the inserts
        let write_start = Instant::now();
        let block = render_create_block(&table_spec);
        writer.write_all(block.as_bytes())?;
        metrics.bytes_written += block.len() as u64;
        write_time += write_start.elapsed();

        for _ in 0..count {
            let gen_start = Instant::now();
            let record = self
                .generator
                .next_record(table_name)
                .map_err(|e| ScriptError::Generator(e.to_string()))?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            let line = render_insert_line(&table_spec, &record);
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            metrics.bytes_written += line.len() as u64 + 1;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        let write_start = Instant::now();
        writer.write_all(EXIT_COMMAND.as_bytes())?;
        writer.write_all(b"\n")?;
        metrics.bytes_written += EXIT_COMMAND.len() as u64 + 1;
        writer.flush()?;
        write_time += write_start.elapsed();

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Script generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Write a complete seed script to a file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        table_name: &str,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, ScriptError> {
        let output_path = output_path.as_ref();
        info!(
            "Writing seed script for table '{}' to '{}'",
            table_name,
            output_path.display()
        );

        let file = File::create(output_path)?;
        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        self.write_script(table_name, writer, count)
    }
}
