//! Short code generation.
//!
//! Codes are uniformly random integers below one million, rendered as their
//! decimal string. The string form is the canonical representation end-to-end:
//! it is what gets stored, matched on lookup, and returned to clients.
//! Collisions are handled by the caller retrying against the store's unique
//! constraint.

use rand::Rng;

/// Exclusive upper bound for generated codes.
const CODE_SPACE: u32 = 1_000_000;

/// Generates a random short code in `[0, 1_000_000)` as a decimal string.
pub fn generate_code() -> String {
    rand::rng().random_range(0..CODE_SPACE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_not_empty() {
        assert!(!generate_code().is_empty());
    }

    #[test]
    fn test_generate_code_is_decimal() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_digit()), "code: {code}");
        }
    }

    #[test]
    fn test_generate_code_within_range() {
        for _ in 0..1000 {
            let code: u32 = generate_code().parse().unwrap();
            assert!(code < CODE_SPACE);
        }
    }

    #[test]
    fn test_generate_code_canonical_string() {
        // No leading zeros: the decimal rendering of the number is the
        // canonical form.
        for _ in 0..100 {
            let code = generate_code();
            let reparsed: u32 = code.parse().unwrap();
            assert_eq!(reparsed.to_string(), code);
        }
    }
}
