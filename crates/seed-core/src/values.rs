//! Value representations for generated records.
//!
//! This module defines the raw value type produced by the generator and the
//! record type that groups one row's values before rendering.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw generated value before rendering.
///
/// `FieldValue` holds the type-agnostic value produced by the data generator
/// for a single attribute. The script renderer turns it into the token that
/// appears on an insert line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean value
    Bool(bool),

    /// 64-bit signed integer
    Int64(i64),

    /// 64-bit floating point
    Float64(f64),

    /// String value
    String(String),

    /// Null value
    Null,
}

impl FieldValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// One generated row in the intermediate format.
///
/// A `Record` is produced by the generator and consumed by the script
/// renderer. It carries the table name, the 0-based row index, the id value,
/// and the field values keyed by field name (field order comes from the
/// table spec at render time).
#[derive(Debug, Clone)]
pub struct Record {
    /// Table name
    pub table: String,

    /// Row index (0-based, for reproducibility and resumable generation)
    pub index: u64,

    /// Id attribute value
    pub id: FieldValue,

    /// Field values (field name -> value)
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Create a new record.
    pub fn new(
        table: impl Into<String>,
        index: u64,
        id: FieldValue,
        fields: HashMap<String, FieldValue>,
    ) -> Self {
        Self {
            table: table.into(),
            index,
            id,
            fields,
        }
    }

    /// Create a new record with a builder pattern.
    pub fn builder(table: impl Into<String>, index: u64, id: FieldValue) -> RecordBuilder {
        RecordBuilder {
            table: table.into(),
            index,
            id,
            fields: HashMap::new(),
        }
    }

    /// Get a field value by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Get the number of fields (excluding the id).
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Builder for `Record`.
pub struct RecordBuilder {
    table: String,
    index: u64,
    id: FieldValue,
    fields: HashMap<String, FieldValue>,
}

impl RecordBuilder {
    /// Add a field to the record.
    pub fn field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Build the record.
    pub fn build(self) -> Record {
        Record {
            table: self.table,
            index: self.index,
            id: self.id,
            fields: self.fields,
        }
    }
}
