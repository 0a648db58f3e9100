//! Individual value generators for the different generator configs.
//!
//! This module provides the generation logic for each kind of value
//! based on the generator configuration from the schema.

pub mod choice;
pub mod numeric;
pub mod pattern;
pub mod static_value;

use rand::Rng;
use seed_core::{FieldValue, GeneratorConfig};

/// Generate a value based on the generator configuration.
pub fn generate_value<R: Rng>(config: &GeneratorConfig, rng: &mut R, index: u64) -> FieldValue {
    match config {
        GeneratorConfig::Sequential { start } => FieldValue::Int64(start + index as i64),

        GeneratorConfig::IntRange { min, max } => numeric::generate_int_range(rng, *min, *max),

        GeneratorConfig::FloatRange { min, max } => {
            numeric::generate_float_range(rng, *min, *max)
        }

        GeneratorConfig::OneOf { values } => choice::generate_one_of(rng, values),

        GeneratorConfig::WeightedBool { true_weight } => {
            FieldValue::Bool(rng.gen_bool(*true_weight))
        }

        GeneratorConfig::Pattern { pattern } => pattern::generate_pattern(pattern, rng, index),

        GeneratorConfig::Static { value } => static_value::yaml_to_field_value(value),

        GeneratorConfig::Null => FieldValue::Null,
    }
}
