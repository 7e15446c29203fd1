//! Generator configuration
//!
//! Holds the user-adjustable length and character class flags.

use std::env::VarError;

use thiserror::Error;

use crate::charset::CharClass;

/// Shortest password the generator produces.
pub const MIN_LENGTH: usize = 4;
/// Longest password the generator produces.
pub const MAX_LENGTH: usize = 24;
/// Length used by `GeneratorConfig::default()`.
pub const DEFAULT_LENGTH: usize = 12;

pub const ENV_LENGTH: &str = "PWD_GEN_LENGTH";
pub const ENV_UPPERCASE: &str = "PWD_GEN_UPPERCASE";
pub const ENV_LOWERCASE: &str = "PWD_GEN_LOWERCASE";
pub const ENV_NUMBERS: &str = "PWD_GEN_NUMBERS";
pub const ENV_SYMBOLS: &str = "PWD_GEN_SYMBOLS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Password length {length} is outside {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Length and character class selection for one generator.
///
/// The length is always within `MIN_LENGTH..=MAX_LENGTH`. The flags may all
/// be off; that case is reported by [`crate::generate`], not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    length: usize,
    uppercase: bool,
    lowercase: bool,
    numbers: bool,
    symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        numbers: bool,
        symbols: bool,
    ) -> Result<Self, ConfigError> {
        check_length(length)?;
        Ok(Self {
            length,
            uppercase,
            lowercase,
            numbers,
            symbols,
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_GEN_LENGTH`: password length (default: 12)
    /// - `PWD_GEN_UPPERCASE`, `PWD_GEN_LOWERCASE`, `PWD_GEN_NUMBERS`,
    ///   `PWD_GEN_SYMBOLS`: class flags (default: enabled)
    ///
    /// Flags accept `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`.
    ///
    /// # Errors
    ///
    /// Returns error if a variable cannot be parsed or the length is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = read_env(ENV_LENGTH)? {
            let length = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: ENV_LENGTH,
                    value: raw.clone(),
                })?;
            config.set_length(length)?;
        }

        for (var, class) in [
            (ENV_UPPERCASE, CharClass::Uppercase),
            (ENV_LOWERCASE, CharClass::Lowercase),
            (ENV_NUMBERS, CharClass::Numbers),
            (ENV_SYMBOLS, CharClass::Symbols),
        ] {
            if let Some(raw) = read_env(var)? {
                config.set_class(class, parse_flag(var, &raw)?);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Generator configuration loaded from environment: {:?}", config);

        Ok(config)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Changes the length. Out-of-range values are rejected and the
    /// previous length is kept.
    pub fn set_length(&mut self, length: usize) -> Result<(), ConfigError> {
        check_length(length)?;
        self.length = length;
        Ok(())
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set_class(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set_class(class, !self.is_enabled(class));
    }

    /// Returns `true` if at least one class is enabled.
    pub fn has_charset(&self) -> bool {
        CharClass::ALL.iter().any(|&c| self.is_enabled(c))
    }
}

fn check_length(length: usize) -> Result<(), ConfigError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(ConfigError::LengthOutOfRange {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

/// Returns `None` for an unset variable. A value that is not valid
/// unicode is an error, not a missing variable.
fn read_env(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(os)) => Err(ConfigError::InvalidEnvValue {
            var,
            value: os.to_string_lossy().into_owned(),
        }),
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var,
            value: raw.to_string(),
        }),
    }
}
