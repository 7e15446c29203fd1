//! Character classes and pool assembly.

use crate::config::GeneratorConfig;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A group of characters the user can include or exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// All classes, in the order they are concatenated into the pool.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// The literal alphabet of this class.
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

/// Builds the character pool for the enabled classes.
///
/// The pool is always lowercase, uppercase, numbers, symbols, so a seeded
/// RNG yields the same password for the same configuration.
/// Returns an empty pool when no class is enabled.
pub fn build_charset(config: &GeneratorConfig) -> Vec<char> {
    let mut pool = Vec::new();
    for class in CharClass::ALL {
        if config.is_enabled(class) {
            pool.extend(class.chars().chars());
        }
    }
    pool
}
