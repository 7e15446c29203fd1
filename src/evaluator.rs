//! Strength classifier - scores a password against the five section checks.
//!
//! The rating is a structural heuristic. It says nothing about how
//! guessable a password actually is.

use std::fmt;

use secrecy::SecretString;

use crate::sections::{
    SectionResult, digit_section, min_length_section, mixed_case_section,
    recommended_length_section, symbol_section,
};

/// Highest possible score, one point per section.
pub const MAX_SCORE: u8 = 5;

/// Coarse strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthRating {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthRating::Weak => "Weak",
            StrengthRating::Medium => "Medium",
            StrengthRating::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Number of passed sections, `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Creates a score, saturating at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn rating(&self) -> StrengthRating {
        match self.0 {
            0..=2 => StrengthRating::Weak,
            3..=4 => StrengthRating::Medium,
            _ => StrengthRating::Strong,
        }
    }
}

/// Score plus the reasons of every failed section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: StrengthScore,
    pub reasons: Vec<String>,
}

impl StrengthEvaluation {
    pub fn rating(&self) -> StrengthRating {
        self.score.rating()
    }
}

/// Evaluates password strength and returns the score with failed-check reasons.
pub fn evaluate_strength(password: &SecretString) -> StrengthEvaluation {
    let sections: [(&str, fn(&SecretString) -> SectionResult); 5] = [
        ("min_length", min_length_section),
        ("recommended_length", recommended_length_section),
        ("mixed_case", mixed_case_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
    ];

    let mut passed = 0u8;
    let mut reasons = Vec::new();

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("Strength section failed: {}", _section_name);
                reasons.push(reason);
            }
            None => passed += 1,
        }
    }

    StrengthEvaluation {
        score: StrengthScore::new(passed),
        reasons,
    }
}

/// Classifies a password as Weak, Medium or Strong.
pub fn classify(password: &SecretString) -> StrengthRating {
    evaluate_strength(password).rating()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_classify_lowercase_digits_is_weak() {
        // length >= 8 and digit pass; no uppercase, so mixed case fails
        let evaluation = evaluate_strength(&secret("abcd1234"));
        assert_eq!(evaluation.score.value(), 2);
        assert_eq!(evaluation.rating(), StrengthRating::Weak);
        assert_eq!(evaluation.reasons.len(), 3);
        assert!(evaluation.reasons.iter().any(|r| r.contains("uppercase")));
    }

    #[test]
    fn test_classify_medium_example() {
        let evaluation = evaluate_strength(&secret("Abcd1234"));
        assert_eq!(evaluation.score.value(), 3);
        assert_eq!(evaluation.rating(), StrengthRating::Medium);
        assert_eq!(evaluation.reasons.len(), 2);
    }

    #[test]
    fn test_classify_strong_example() {
        let evaluation = evaluate_strength(&secret("abcdEFGH12!@"));
        assert_eq!(evaluation.score.value(), 5);
        assert_eq!(evaluation.rating(), StrengthRating::Strong);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_classify_weak_short_password() {
        let evaluation = evaluate_strength(&secret("ab"));
        assert_eq!(evaluation.score.value(), 0);
        assert_eq!(evaluation.rating(), StrengthRating::Weak);
        assert_eq!(evaluation.reasons.len(), 5);
    }

    #[test]
    fn test_classify_empty_password() {
        assert_eq!(classify(&secret("")), StrengthRating::Weak);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for pwd in ["", "ab", "abcd1234", "abcdEFGH12!@", "Zz9?Zz9?Zz9?Zz9?"] {
            assert_eq!(classify(&secret(pwd)), classify(&secret(pwd)));
        }
    }

    #[test]
    fn test_score_to_rating_boundaries() {
        let expected = [
            StrengthRating::Weak,
            StrengthRating::Weak,
            StrengthRating::Weak,
            StrengthRating::Medium,
            StrengthRating::Medium,
            StrengthRating::Strong,
        ];
        for (value, rating) in expected.iter().enumerate() {
            assert_eq!(StrengthScore::new(value as u8).rating(), *rating);
        }
    }

    #[test]
    fn test_score_saturates() {
        assert_eq!(StrengthScore::new(9).value(), MAX_SCORE);
    }

    #[test]
    fn test_long_without_symbols_is_medium() {
        // length 8, length 12, mixed case, digit; no symbol
        assert_eq!(classify(&secret("Abcdefghij12")), StrengthRating::Medium);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(StrengthRating::Weak.to_string(), "Weak");
        assert_eq!(StrengthRating::Medium.to_string(), "Medium");
        assert_eq!(StrengthRating::Strong.to_string(), "Strong");
    }
}
