//! Character variety sections - mixed case, digits, symbols.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks if the password mixes ASCII uppercase and lowercase letters.
///
/// # Returns
/// - `Some(reason)` if either case is missing
/// - `None` if both cases are present
pub fn mixed_case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Mix uppercase and lowercase letters".to_string());
    }
    None
}

/// Checks if the password contains an ASCII digit.
///
/// # Returns
/// - `Some(reason)` if no digit is present
/// - `None` if at least one digit is present
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Include at least one number".to_string());
    }
    None
}

/// Checks if the password contains a character outside `[A-Za-z0-9]`.
///
/// # Returns
/// - `Some(reason)` if every character is an ASCII letter or digit
/// - `None` if at least one symbol is present
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("Include at least one symbol".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_mixed_case_section_missing_uppercase() {
        let result = mixed_case_section(&secret("lowercase123!"));
        assert!(matches!(result, Some(reason) if reason.contains("uppercase")));
    }

    #[test]
    fn test_mixed_case_section_missing_lowercase() {
        assert!(mixed_case_section(&secret("UPPERCASE123!")).is_some());
    }

    #[test]
    fn test_mixed_case_section_passes() {
        assert_eq!(mixed_case_section(&secret("aB")), None);
    }

    #[test]
    fn test_digit_section() {
        assert!(digit_section(&secret("NoNumbers!")).is_some());
        assert_eq!(digit_section(&secret("one1")), None);
    }

    #[test]
    fn test_symbol_section() {
        assert!(symbol_section(&secret("NoSpecial123")).is_some());
        assert_eq!(symbol_section(&secret("Has!")), None);
    }

    #[test]
    fn test_symbol_section_counts_non_ascii_and_space() {
        assert_eq!(symbol_section(&secret("abc def")), None);
        assert_eq!(symbol_section(&secret("caffè")), None);
    }

    #[test]
    fn test_empty_password_fails_all() {
        let pwd = secret("");
        assert!(mixed_case_section(&pwd).is_some());
        assert!(digit_section(&pwd).is_some());
        assert!(symbol_section(&pwd).is_some());
    }
}
