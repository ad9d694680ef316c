//! Game configuration.
//!
//! A `GameConfig` fixes the shape of one game:
//! - sequence length
//! - guess limit (`0` = unlimited)
//! - whether the secret may repeat symbols
//! - the resource pool the secret is drawn from
//!
//! The configuration is immutable once a game starts.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig<K> {
    /// Can the secret reuse pool entries?
    pub duplicates_allowed: bool,

    /// Number of slots in the secret and in every guess.
    pub sequence_length: usize,

    /// Number of guesses allowed. `0` means unlimited.
    pub max_guesses: usize,

    /// Symbols the secret is drawn from, in caller order.
    pub resources: Vec<K>,

    /// Reject inserted symbols that are not in `resources`.
    ///
    /// Off by default: any value of the symbol type is accepted and simply
    /// never scores if it is outside the pool.
    pub strict_resources: bool,
}

impl<K> GameConfig<K> {
    /// Create a configuration without duplicates and with lenient inserts.
    pub fn new(sequence_length: usize, max_guesses: usize, resources: Vec<K>) -> Self {
        Self {
            duplicates_allowed: false,
            sequence_length,
            max_guesses,
            resources,
            strict_resources: false,
        }
    }

    /// Allow the secret to repeat symbols.
    #[must_use]
    pub fn with_duplicates(mut self) -> Self {
        self.duplicates_allowed = true;
        self
    }

    /// Set the duplicates flag explicitly.
    #[must_use]
    pub fn duplicates(mut self, allowed: bool) -> Self {
        self.duplicates_allowed = allowed;
        self
    }

    /// Only accept guesses drawn from the resource pool.
    #[must_use]
    pub fn strict_resources(mut self) -> Self {
        self.strict_resources = true;
        self
    }

    /// Is the number of guesses unbounded?
    #[must_use]
    pub fn is_unlimited(&self) -> bool {
        self.max_guesses == 0
    }

    /// Check the configuration can start a game.
    ///
    /// Each failure is reported separately as [`EngineError::InvalidArgument`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.resources.is_empty() {
            return Err(EngineError::argument("resource pool is empty"));
        }
        if self.sequence_length == 0 {
            return Err(EngineError::argument("sequence length must be positive"));
        }
        if !self.duplicates_allowed && self.sequence_length > self.resources.len() {
            return Err(EngineError::argument(format!(
                "sequence length {} exceeds {} resources without duplicates",
                self.sequence_length,
                self.resources.len()
            )));
        }
        Ok(())
    }
}
