//! Main record generator for producing test data rows.

use crate::generators::generate_value;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_core::{FieldValue, Record, SeedSchema};
use std::collections::HashMap;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(#[from] seed_core::SchemaError),
}

/// Record generator that produces deterministic test data rows.
///
/// The generator uses a seeded random number generator so that runs with the
/// same seed and schema produce identical records.
pub struct RecordGenerator {
    /// Schema defining the tables and attribute generators
    schema: SeedSchema,
    /// Base seed the RNG state derives from
    seed: u64,
    /// Seeded random number generator
    rng: StdRng,
    /// Current row index (for resumable generation)
    index: u64,
}

impl RecordGenerator {
    /// Create a new record generator with the given schema and seed.
    pub fn new(schema: SeedSchema, seed: u64) -> Self {
        Self {
            schema,
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Set the starting index for row generation.
    ///
    /// Useful for resuming generation at a specific point. The RNG is
    /// re-seeded from the base seed combined with the index, so output is
    /// deterministic per (seed, start index) pair.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self.rng = StdRng::seed_from_u64(self.rng_seed_for_index(index));
        self
    }

    /// Compute the RNG seed for a specific start index.
    fn rng_seed_for_index(&self, index: u64) -> u64 {
        self.seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15))
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next record for the given table.
    pub fn next_record(&mut self, table: &str) -> Result<Record, GeneratorError> {
        let table_spec = self
            .schema
            .get_table(table)
            .ok_or_else(|| GeneratorError::TableNotFound(table.to_string()))?;

        let index = self.index;
        let table_name = table_spec.name.clone();

        // Generate the id, then every field in attribute order
        let id = generate_value(&table_spec.id.generator, &mut self.rng, index);

        let fields: HashMap<String, FieldValue> = table_spec
            .fields
            .iter()
            .map(|field| {
                let value = generate_value(&field.generator, &mut self.rng, index);
                (field.name.clone(), value)
            })
            .collect();

        self.index += 1;

        Ok(Record::new(table_name, index, id, fields))
    }

    /// Generate multiple records for the given table.
    ///
    /// Returns an iterator that lazily generates records.
    pub fn records(
        &mut self,
        table: &str,
        count: u64,
    ) -> Result<RecordIterator<'_>, GeneratorError> {
        // Verify the table exists before handing out the iterator
        if self.schema.get_table(table).is_none() {
            return Err(GeneratorError::TableNotFound(table.to_string()));
        }

        Ok(RecordIterator {
            generator: self,
            table: table.to_string(),
            remaining: count,
        })
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &SeedSchema {
        &self.schema
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a> {
    generator: &'a mut RecordGenerator,
    table: String,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;

        // This should not fail since we verified the table exists
        self.generator.next_record(&self.table).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}
