//! Engine error types.
//!
//! Every fallible engine operation returns [`EngineResult`]. There are only two
//! kinds of failure:
//!
//! - [`EngineError::InvalidArgument`]: the caller passed structurally invalid
//!   input (out-of-range index, wrong-length guess, bad configuration).
//! - [`EngineError::InvalidState`]: the operation is not allowed right now
//!   (no game started, game already over, guess incomplete).
//!
//! Checks always run before any mutation, so a failed call leaves the engine
//! exactly as it was.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Caller supplied structurally invalid input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation invoked in a state that does not permit it.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl EngineError {
    pub(crate) fn argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub(crate) fn state(reason: impl Into<String>) -> Self {
        Self::InvalidState(reason.into())
    }

    /// True for [`EngineError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// True for [`EngineError::InvalidState`].
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
