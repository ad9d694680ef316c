//! # mastermind-engine
//!
//! A rules engine for the Mastermind code-breaking game.
//!
//! The engine keeps a hidden secret, validates guesses, scores them and
//! tracks when the game ends. It is generic over the symbol type: colors,
//! integers, strings, anything `Clone + Eq + Hash`.
//!
//! ## Design Principles
//!
//! 1. **Explicit Errors**: Every operation returns `EngineResult`. Failures
//!    are either `InvalidArgument` or `InvalidState` and never change state.
//!
//! 2. **Deterministic**: Secrets come from an injectable, seedable `GameRng`.
//!
//! 3. **Cheap Clones**: Round history uses `im` persistent vectors, so an
//!    engine can be forked for what-if exploration.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, RNG, rounds, session state
//! - `rules`: Scoring and the `GameEngine` state machine
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    EngineError, EngineResult,
    GameConfig,
    GameRng, GameRngState,
    Round, Outcome, Session, Symbol,
};

pub use crate::rules::{score, GameEngine, GameSnapshot, Score};
