//! Seed-script populator for the flat-file DBMS.
//!
//! This crate renders generated records into the consumer's command grammar
//! (create block, insert lines, exit) and writes complete seed scripts to a
//! file or any `io::Write`, using the seed-generator crate for the data.
//!
//! # Example
//!
//! ```ignore
//! use seed_script::ScriptPopulator;
//! use seed_core::SeedSchema;
//!
//! let schema = SeedSchema::from_file("schemas/stores.yaml")?;
//! let mut populator = ScriptPopulator::new(schema, 42);
//!
//! // Write a script with 5000 insert lines
//! let metrics = populator.populate("stores", "stores.dbms", 5000)?;
//! ```

pub mod args;
mod error;
mod populator;
pub mod script;

pub use args::{CommonSeedArgs, GenerateArgs};
pub use error::ScriptError;
pub use populator::{PopulateMetrics, ScriptPopulator, DEFAULT_BUFFER_SIZE};
