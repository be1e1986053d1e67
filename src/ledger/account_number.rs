//! Account number generation
//!
//! Derives a human-readable identifier from the holder name: the first three
//! letters uppercased plus a random 4-digit suffix, e.g. `ALI4821`. The
//! generator makes no uniqueness promise; the engine inserts and retries on
//! a unique-key violation.

use rand::Rng;

use crate::domain::DomainError;

/// Inclusive suffix range, always 4 digits.
const SUFFIX_MIN: u32 = 1000;
const SUFFIX_MAX: u32 = 9999;

/// Generate a candidate account number for the given holder name.
///
/// Fails with `DomainError::InvalidInput` when the name contains fewer than
/// three letters.
pub fn generate(holder_name: &str) -> Result<String, DomainError> {
    let prefix: String = holder_name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if prefix.len() < 3 {
        return Err(DomainError::InvalidInput(
            "holder name must contain at least 3 letters".to_string(),
        ));
    }

    let suffix = rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX);
    Ok(format!("{prefix}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_format(number: &str, prefix: &str) {
        assert_eq!(number.len(), 7);
        assert_eq!(&number[..3], prefix);
        let suffix: u32 = number[3..].parse().expect("numeric suffix");
        assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
    }

    #[test]
    fn test_generate_uppercases_prefix() {
        let number = generate("alice").unwrap();
        assert_format(&number, "ALI");
    }

    #[test]
    fn test_generate_skips_non_letters() {
        let number = generate(" a.b-cd ").unwrap();
        assert_format(&number, "ABC");
    }

    #[test]
    fn test_generate_short_name_rejected() {
        assert!(matches!(generate("Al"), Err(DomainError::InvalidInput(_))));
        assert!(matches!(generate(""), Err(DomainError::InvalidInput(_))));
        // Digits alone do not count as letters
        assert!(matches!(generate("B2"), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_generate_suffix_in_range() {
        for _ in 0..100 {
            let number = generate("Alice").unwrap();
            assert_format(&number, "ALI");
        }
    }
}
