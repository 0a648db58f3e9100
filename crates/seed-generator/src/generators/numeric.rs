//! Numeric value generators.

use rand::Rng;
use seed_core::FieldValue;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> FieldValue {
    FieldValue::Int64(rng.gen_range(min..=max))
}

/// Generate a random float in the given range (inclusive).
pub fn generate_float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> FieldValue {
    FieldValue::Float64(rng.gen_range(min..=max))
}
