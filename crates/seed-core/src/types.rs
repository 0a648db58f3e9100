//! Field type universe for the dbseed script generator.
//!
//! This module defines `FieldType`, the set of storage types understood by
//! the flat-file DBMS that consumes generated scripts. Each type maps to the
//! integer type code the consumer's catalog records for it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Storage type of a table attribute.
///
/// The consumer tool tags every catalog attribute with an integer type code:
///
/// | variant            | type code |
/// |--------------------|-----------|
/// | `Int`              | `1`       |
/// | `Float`            | `2`       |
/// | `String { width }` | `3`       |
/// | `Bool`             | `4`       |
///
/// String attributes additionally declare a fixed storage width, emitted on
/// its own line in the create block.
///
/// # YAML Format
///
/// Simple types can be specified as strings:
/// ```yaml
/// type: int
/// type: float
/// type: bool
/// ```
///
/// The width-carrying string type uses object format:
/// ```yaml
/// type:
///   type: string
///   width: 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Integer attribute (record ids, counters)
    Int,

    /// Floating-point attribute
    Float,

    /// String attribute with a declared storage width
    String {
        /// Declared width in bytes
        width: u16,
    },

    /// Boolean attribute, rendered as `true`/`false`
    Bool,
}

impl FieldType {
    /// Create a new string type with the given width.
    pub fn string(width: u16) -> Self {
        Self::String { width }
    }

    /// The integer type code the consumer's catalog uses for this type.
    pub fn type_code(&self) -> u8 {
        match self {
            Self::Int => 1,
            Self::Float => 2,
            Self::String { .. } => 3,
            Self::Bool => 4,
        }
    }

    /// Declared storage width, for types that carry one.
    pub fn width(&self) -> Option<u16> {
        match self {
            Self::String { width } => Some(*width),
            _ => None,
        }
    }

    /// Check if this type represents a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Check if this type represents a string type.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String { .. })
    }
}

// Custom serialization/deserialization for FieldType.
// Supports both simple string format ("int", "float") and object format
// ({"type": "string", "width": 15}).

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Int => serializer.serialize_str("int"),
            Self::Float => serializer.serialize_str("float"),
            Self::Bool => serializer.serialize_str("bool"),
            Self::String { width } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "string")?;
                map.serialize_entry("width", width)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct FieldTypeVisitor;

        impl<'de> Visitor<'de> for FieldTypeVisitor {
            type Value = FieldType;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a FieldType")
            }

            // Handle string format: "int", "float", "bool"
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match value {
                    "int" => Ok(FieldType::Int),
                    "float" => Ok(FieldType::Float),
                    "bool" => Ok(FieldType::Bool),
                    "string" => Err(E::custom("string type requires a width")),
                    _ => Err(E::custom(format!("unknown simple type: {value}"))),
                }
            }

            // Handle map format: {"type": "string", "width": 15}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "int" => Ok(FieldType::Int),
                    "float" => Ok(FieldType::Float),
                    "bool" => Ok(FieldType::Bool),
                    "string" => {
                        let width = fields
                            .get("width")
                            .ok_or_else(|| M::Error::missing_field("width"))?;
                        let width: u16 = serde_yaml::from_value(width.clone())
                            .map_err(|e| M::Error::custom(format!("invalid width: {e}")))?;
                        Ok(FieldType::String { width })
                    }
                    _ => Err(M::Error::custom(format!("unknown type: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(FieldTypeVisitor)
    }
}
