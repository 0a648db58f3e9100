//! Static value generator and YAML to FieldValue conversion.

use seed_core::FieldValue;
use serde_yaml::Value as YamlValue;

/// Convert a YAML scalar to a FieldValue.
///
/// Sequences and mappings have no representation in the flat line format;
/// they convert to null here and are rejected earlier by sink validation.
pub fn yaml_to_field_value(yaml: &YamlValue) -> FieldValue {
    match yaml {
        YamlValue::Null => FieldValue::Null,
        YamlValue::Bool(b) => FieldValue::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Int64(i)
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float64(f)
            } else {
                FieldValue::String(n.to_string())
            }
        }
        YamlValue::String(s) => FieldValue::String(s.clone()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => FieldValue::Null,
        YamlValue::Tagged(tagged) => yaml_to_field_value(&tagged.value),
    }
}
