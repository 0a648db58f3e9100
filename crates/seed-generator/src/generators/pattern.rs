//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - row index
//! - `{rand:N}` - random N-digit number

use rand::Rng;
use seed_core::FieldValue;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> FieldValue {
    let mut result = pattern.to_string();

    // Replace {index}
    result = result.replace("{index}", &index.to_string());

    // Replace {rand:N} patterns
    while let Some(start) = result.find("{rand:") {
        if let Some(end) = result[start..].find('}') {
            let end = start + end;
            let digits_str = &result[start + 6..end];
            if let Ok(digits) = digits_str.parse::<usize>() {
                let random_num = generate_random_digits(rng, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
            } else {
                // Invalid format, leave the rest untouched
                break;
            }
        } else {
            break;
        }
    }

    FieldValue::String(result)
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit should be 1-9 to avoid leading zeros
    result.push(char::from_digit(rng.gen_range(1..10), 10).unwrap());

    // Remaining digits can be 0-9
    for _ in 1..digits {
        result.push(char::from_digit(rng.gen_range(0..10), 10).unwrap());
    }

    result
}
