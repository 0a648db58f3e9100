//! Uniform selection from a fixed pool of values.

use crate::generators::static_value::yaml_to_field_value;
use rand::Rng;
use seed_core::FieldValue;
use serde_yaml::Value as YamlValue;

/// Pick one value uniformly (with replacement) from the pool.
///
/// An empty pool yields null.
pub fn generate_one_of<R: Rng>(rng: &mut R, values: &[YamlValue]) -> FieldValue {
    if values.is_empty() {
        FieldValue::Null
    } else {
        let idx = rng.gen_range(0..values.len());
        yaml_to_field_value(&values[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(names: &[&str]) -> Vec<YamlValue> {
        names
            .iter()
            .map(|n| YamlValue::String(n.to_string()))
            .collect()
    }

    #[test]
    fn test_picks_are_members_of_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = pool(&["Boston", "New York", "Salt Lake City"]);

        for _ in 0..100 {
            let value = generate_one_of(&mut rng, &values);
            let s = value.as_str().expect("expected a string pick");
            assert!(["Boston", "New York", "Salt Lake City"].contains(&s));
        }
    }

    #[test]
    fn test_all_members_eventually_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        let values = pool(&["a", "b", "c"]);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let FieldValue::String(s) = generate_one_of(&mut rng, &values) {
                seen.insert(s);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_pool_yields_null() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_one_of(&mut rng, &[]), FieldValue::Null);
    }

    #[test]
    fn test_mixed_scalar_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let values: Vec<YamlValue> = serde_yaml::from_str("[1, 2.5, true]").unwrap();

        for _ in 0..50 {
            let value = generate_one_of(&mut rng, &values);
            assert!(matches!(
                value,
                FieldValue::Int64(1) | FieldValue::Float64(_) | FieldValue::Bool(true)
            ));
        }
    }
}
