//! Error types for the script populator.

use thiserror::Error;

/// Errors that can occur during script population.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema-related error.
    #[error("Schema error: {0}")]
    Schema(#[from] seed_core::SchemaError),

    /// Table not found in schema.
    #[error("Table '{0}' not found in schema")]
    TableNotFound(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(String),

    /// A configured value cannot appear in the line-oriented script format.
    #[error("Value not representable in script output: {0}")]
    Unrepresentable(String),
}
