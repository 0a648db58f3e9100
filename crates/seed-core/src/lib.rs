//! Core types for the dbseed script generator.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`FieldType`] - the consumer DBMS's attribute type universe
//! - [`FieldValue`] - raw generated values before rendering
//! - [`Record`] - intermediate row representation
//! - [`SeedSchema`] - schema definitions loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator  (depends on seed-core for schema and values)
//!    │
//!    └─── seed-script     (renders records into the command grammar)
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldSpec, GeneratorConfig, IdSpec, SchemaError, SeedSchema, TableSpec};
pub use types::FieldType;
pub use values::{FieldValue, Record, RecordBuilder};
