//! Random password generation library
//!
//! This library generates passwords from user-selected character classes
//! and rates them with a coarse Weak/Medium/Strong heuristic.
//!
//! The rating is a structural check (length, mixed case, digits, symbols),
//! not a measure of how hard a password is to guess. The default RNG is not
//! documented as cryptographically secure.
//!
//! # Features
//!
//! - `async` (default): Enables delivery of generations over a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: password length, 4 to 24 (default: 12)
//! - `PWD_GEN_UPPERCASE`, `PWD_GEN_LOWERCASE`, `PWD_GEN_NUMBERS`,
//!   `PWD_GEN_SYMBOLS`: character class flags (default: enabled)
//!
//! # Example
//!
//! ```rust
//! use pwd_generator::{GeneratorConfig, classify, generate};
//! use secrecy::ExposeSecret;
//!
//! let config = GeneratorConfig::default();
//! let password = generate(&config).expect("default config has a charset");
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Strength: {}", classify(password.as_secret()));
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;
mod session;

// Public API
pub use charset::{CharClass, build_charset};
pub use config::{ConfigError, DEFAULT_LENGTH, GeneratorConfig, MAX_LENGTH, MIN_LENGTH};
pub use evaluator::{
    MAX_SCORE, StrengthEvaluation, StrengthRating, StrengthScore, classify, evaluate_strength,
};
pub use generator::{
    Generation, NoCharsetSelectedError, Password, generate, generate_with_rng,
};
pub use session::{Clipboard, GeneratorSession};

#[cfg(feature = "async")]
pub use generator::generate_tx;
