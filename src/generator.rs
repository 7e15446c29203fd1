//! Password generator - draws random characters from the enabled classes.

use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::charset::build_charset;
use crate::config::GeneratorConfig;
use crate::evaluator::{StrengthEvaluation, StrengthRating, evaluate_strength};

/// Every character class is disabled, so there is nothing to draw from.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Please select at least one option")]
pub struct NoCharsetSelectedError;

/// A generated password. Immutable once created.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }

    pub fn as_secret(&self) -> &SecretString {
        &self.0
    }

    pub fn evaluate(&self) -> StrengthEvaluation {
        evaluate_strength(&self.0)
    }
}

impl ExposeSecret<str> for Password {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(SecretString::new(value.into()))
    }
}

/// A password together with its strength, computed once at creation.
#[derive(Debug)]
pub struct Generation {
    password: Password,
    evaluation: StrengthEvaluation,
}

impl Generation {
    pub fn new(password: Password) -> Self {
        let evaluation = password.evaluate();
        Self {
            password,
            evaluation,
        }
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn evaluation(&self) -> &StrengthEvaluation {
        &self.evaluation
    }

    pub fn strength(&self) -> StrengthRating {
        self.evaluation.rating()
    }

    pub fn into_password(self) -> Password {
        self.password
    }
}

/// Generates a password using the thread-local RNG.
///
/// The RNG is not a cryptographic guarantee of this crate.
pub fn generate(config: &GeneratorConfig) -> Result<Password, NoCharsetSelectedError> {
    generate_with_rng(config, &mut rand::rng())
}

/// Generates a password drawing from `rng`.
///
/// Each of the `config.length()` characters is sampled independently and
/// uniformly, with replacement, from the pool built by [`build_charset`].
pub fn generate_with_rng<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Password, NoCharsetSelectedError> {
    let pool = build_charset(config);
    if pool.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation refused: no character class selected");
        return Err(NoCharsetSelectedError);
    }

    let password: String = (0..config.length())
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password of {} characters from a pool of {}",
        config.length(),
        pool.len()
    );

    Ok(Password::from(password))
}

/// Async version that sends the generation result via channel.
///
/// Generation itself is synchronous; this only hands the result to a task
/// waiting on `tx`.
#[cfg(feature = "async")]
pub async fn generate_tx(
    config: GeneratorConfig,
    tx: mpsc::Sender<Result<Generation, NoCharsetSelectedError>>,
) {
    let result = generate(&config).map(Generation::new);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password generation result: {}", _e);
    }
}
