//! dbseed library surface.
//!
//! The binary wires the CLI onto the handlers in [`generate`]; integration
//! tests drive the same entry points directly.

pub mod generate;

pub use generate::{
    load_schema, run_generate, run_schema_check, MetricsReport, DEFAULT_SCHEMA_YAML, DEFAULT_SEED,
};
