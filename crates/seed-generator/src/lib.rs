//! Deterministic record generator for dbseed.
//!
//! This crate provides the [`RecordGenerator`], which produces test data
//! records based on a YAML schema. The generator uses a seeded RNG so runs
//! with the same seed and schema are reproducible.
//!
//! # Architecture
//!
//! ```text
//! SeedSchema (YAML)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │  RecordGenerator  │
//! │                   │
//! │  - seed           │
//! │  - rng (StdRng)   │
//! │  - index          │
//! └─────────┬─────────┘
//!           │
//!           ▼
//!    Record { table, index, id, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::RecordGenerator;
//! use seed_core::SeedSchema;
//!
//! let schema = SeedSchema::from_yaml(r#"
//! version: 1
//! tables:
//!   - name: stores
//!     id:
//!       name: store_id
//!       type: int
//!       generator:
//!         type: sequential
//!     fields:
//!       - name: location
//!         type:
//!           type: string
//!           width: 32
//!         generator:
//!           type: one_of
//!           values: [Boston, "New York"]
//! "#).unwrap();
//!
//! let mut generator = RecordGenerator::new(schema, 42);
//! let record = generator.next_record("stores").unwrap();
//! println!("Generated record: {:?}", record);
//! ```
//!
//! # Generators
//!
//! The following generator types are supported:
//!
//! - `sequential` - Sequential integers
//! - `int_range` - Random integers in a range
//! - `float_range` - Random floats in a range
//! - `one_of` - Uniform random selection from a pool
//! - `weighted_bool` - Boolean with configurable true probability
//! - `pattern` - Pattern strings with placeholders (`{index}`, `{rand:N}`)
//! - `static` - Static value
//! - `null` - Null value

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{GeneratorError, RecordGenerator, RecordIterator};
