//! Schema definitions for the dbseed script generator.
//!
//! A `SeedSchema` is loaded from a YAML document and is the single source of
//! truth for what gets generated: table names, attribute layout, and the
//! generator configuration for every attribute. Swapping the schema file
//! swaps the generated data without touching any generation logic.

use crate::types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Table not found in schema
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Field not found in table schema
    #[error("Field '{field}' not found in table '{table}'")]
    FieldNotFound { table: String, field: String },
}

/// Generator configuration for an attribute.
///
/// This enum defines the value generators available for producing test data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate sequential integers
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Generate random integers in a range (inclusive)
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random floats in a range (inclusive)
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Uniform random selection (with replacement) from a pool of values
    OneOf {
        /// Pool of values to select from
        values: Vec<serde_yaml::Value>,
    },

    /// Generate weighted boolean values
    WeightedBool {
        /// Weight for the true value (0.0 to 1.0)
        true_weight: f64,
    },

    /// Generate strings from a pattern with placeholders (`{index}`, `{rand:N}`)
    Pattern {
        /// Pattern string
        pattern: String,
    },

    /// Generate a static value
    Static {
        /// The static value to use
        value: serde_yaml::Value,
    },

    /// Generate null values
    Null,
}

impl GeneratorConfig {
    /// Literal strings this config can emit, for sink-safety checks.
    ///
    /// The script format splits insert lines on commas, so sinks reject
    /// pools whose string values would corrupt a line.
    pub fn literal_strings(&self) -> Vec<&str> {
        match self {
            Self::OneOf { values } => values.iter().filter_map(|v| v.as_str()).collect(),
            Self::Static { value } => value.as_str().into_iter().collect(),
            Self::Pattern { pattern } => vec![pattern.as_str()],
            _ => Vec::new(),
        }
    }

    /// Check whether any configured value is a non-scalar (sequence or
    /// mapping), which no flat line format can carry.
    pub fn has_non_scalar_values(&self) -> bool {
        fn is_scalar(value: &serde_yaml::Value) -> bool {
            matches!(
                value,
                serde_yaml::Value::Null
                    | serde_yaml::Value::Bool(_)
                    | serde_yaml::Value::Number(_)
                    | serde_yaml::Value::String(_)
            )
        }

        match self {
            Self::OneOf { values } => values.iter().any(|v| !is_scalar(v)),
            Self::Static { value } => !is_scalar(value),
            _ => false,
        }
    }
}

/// Id attribute definition with its generator.
///
/// Unlike ordinary fields the id carries the name of the id attribute
/// itself (e.g. `store_id`), since the consumer's catalog records it like
/// any other attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdSpec {
    /// Id attribute name
    pub name: String,

    /// Type of the id attribute
    #[serde(rename = "type")]
    pub id_type: FieldType,

    /// Generator configuration for the id
    pub generator: GeneratorConfig,
}

/// Field definition with its generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Generator configuration for this field
    pub generator: GeneratorConfig,
}

/// Table definition: id attribute plus ordered fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Table name
    pub name: String,

    /// Id attribute definition
    pub id: IdSpec,

    /// Field definitions, in attribute order
    pub fields: Vec<FieldSpec>,
}

impl TableSpec {
    /// Name of the data file backing this table (`<name>.dat`).
    pub fn data_file(&self) -> String {
        format!("{}.dat", self.name)
    }

    /// Get a field spec by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get the type of a field by name.
    pub fn get_field_type(&self, name: &str) -> Option<&FieldType> {
        self.get_field(name).map(|f| &f.field_type)
    }

    /// Get all attribute names (id first, then fields in order).
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names = vec![self.id.name.as_str()];
        names.extend(self.fields.iter().map(|f| f.name.as_str()));
        names
    }
}

fn default_version() -> u32 {
    1
}

/// Full seed schema.
///
/// Loaded from a YAML file, the schema defines the structure and generation
/// rules for all tables, and optionally a default random seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default random seed (overridable from the CLI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Table definitions
    pub tables: Vec<TableSpec>,

    /// Cached table lookup (not serialized)
    #[serde(skip)]
    table_map: HashMap<String, usize>,
}

impl SeedSchema {
    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: SeedSchema = serde_yaml::from_str(yaml)?;
        schema.build_table_map();
        Ok(schema)
    }

    /// Build the internal table lookup map.
    fn build_table_map(&mut self) {
        self.table_map = self
            .tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();
    }

    /// Get a table spec by name.
    pub fn get_table(&self, name: &str) -> Option<&TableSpec> {
        self.table_map
            .get(name)
            .and_then(|&idx| self.tables.get(idx))
    }

    /// Get the type of a field in a specific table.
    pub fn get_field_type(&self, table: &str, field: &str) -> Result<&FieldType, SchemaError> {
        let table_spec = self
            .get_table(table)
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))?;

        table_spec
            .get_field_type(field)
            .ok_or_else(|| SchemaError::FieldNotFound {
                table: table.to_string(),
                field: field.to_string(),
            })
    }

    /// Get all table names in the schema.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}
