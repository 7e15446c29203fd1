//! Length sections - minimum and recommended password length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

fn length_at_least(password: &SecretString, min: usize) -> SectionResult {
    if password.expose_secret().chars().count() < min {
        return Some(format!("Use at least {} characters", min));
    }
    None
}

/// Checks if the password meets the minimum length of 8 characters.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn min_length_section(password: &SecretString) -> SectionResult {
    length_at_least(password, MIN_LENGTH)
}

/// Checks if the password reaches the recommended length of 12 characters.
///
/// # Returns
/// - `Some(reason)` if password is shorter than recommended
/// - `None` if password has the recommended length
pub fn recommended_length_section(password: &SecretString) -> SectionResult {
    length_at_least(password, RECOMMENDED_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(
            min_length_section(&pwd),
            Some("Use at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_min_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(min_length_section(&pwd), None);
        assert!(recommended_length_section(&pwd).is_some());
    }

    #[test]
    fn test_recommended_length_section_exactly_twelve() {
        let pwd = SecretString::new("abcdefghijkl".to_string().into());
        assert_eq!(recommended_length_section(&pwd), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 8 bytes
        let pwd = SecretString::new("éééé".to_string().into());
        assert!(min_length_section(&pwd).is_some());
    }
}
