//! Generator session - the configuration and current result of one user.

use secrecy::ExposeSecret;

use crate::charset::CharClass;
use crate::config::{ConfigError, GeneratorConfig};
use crate::evaluator::StrengthRating;
use crate::generator::{Generation, NoCharsetSelectedError, Password, generate};

/// Host capability for writing text to the system clipboard.
///
/// Returns `true` if the write succeeded.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> bool;
}

/// Owns one configuration and the password last generated from it.
///
/// Configuration changes do not regenerate on their own; call
/// [`GeneratorSession::regenerate`].
#[derive(Debug)]
pub struct GeneratorSession {
    config: GeneratorConfig,
    current: Option<Generation>,
    copied: bool,
}

impl Default for GeneratorSession {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl GeneratorSession {
    /// Creates a session and generates the first password right away.
    pub fn new(config: GeneratorConfig) -> Self {
        let mut session = Self {
            config,
            current: None,
            copied: false,
        };
        // An empty charset leaves the session in the error state.
        if let Err(_e) = session.regenerate() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Session started without a password: {}", _e);
        }
        session
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), ConfigError> {
        self.config.set_length(length)
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.config.toggle(class);
    }

    /// Generates a new password from the current configuration.
    ///
    /// On error the previous password and rating are discarded.
    pub fn regenerate(&mut self) -> Result<StrengthRating, NoCharsetSelectedError> {
        self.copied = false;
        match generate(&self.config) {
            Ok(password) => {
                let generation = Generation::new(password);
                let strength = generation.strength();
                self.current = Some(generation);
                Ok(strength)
            }
            Err(e) => {
                self.current = None;
                Err(e)
            }
        }
    }

    pub fn generation(&self) -> Option<&Generation> {
        self.current.as_ref()
    }

    pub fn password(&self) -> Option<&Password> {
        self.current.as_ref().map(Generation::password)
    }

    pub fn strength(&self) -> Option<StrengthRating> {
        self.current.as_ref().map(Generation::strength)
    }

    /// Whether the current password has been copied since it was generated.
    pub fn copied(&self) -> bool {
        self.copied
    }

    /// Copies the current password. Returns `false` if there is no
    /// password or the clipboard write failed.
    pub fn copy_to_clipboard<C: Clipboard>(&mut self, clipboard: &mut C) -> bool {
        let Some(generation) = self.current.as_ref() else {
            return false;
        };

        let ok = clipboard.write_text(generation.password().expose_secret());
        if ok {
            self.copied = true;
        } else {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to copy password to clipboard");
        }
        ok
    }
}
