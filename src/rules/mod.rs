//! Game rules: scoring and the engine that enforces play.
//!
//! - `scoring`: exact/inexact counting for a guess against a secret
//! - `engine`: `GameEngine`, the state machine players drive

pub mod engine;
pub mod scoring;

pub use engine::{GameEngine, GameSnapshot};
pub use scoring::{score, Score};
