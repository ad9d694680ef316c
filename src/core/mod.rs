//! Core engine types: errors, configuration, RNG, rounds, session state.
//!
//! These are the building blocks the rules layer drives. Nothing here knows
//! how a guess is scored beyond calling into `rules::scoring`.

pub mod error;
pub mod config;
pub mod rng;
pub mod round;
pub mod state;

pub use error::{EngineError, EngineResult};
pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
pub use round::{GuessBuffer, Round};
pub use state::{Outcome, Session, Symbol};
