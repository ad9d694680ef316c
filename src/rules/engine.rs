//! The Mastermind game engine.
//!
//! `GameEngine` owns an optional [`Session`] plus the RNG that generates
//! secrets. Until `start_game` succeeds every operation fails with
//! [`EngineError::InvalidState`]; afterwards it delegates to the session.
//!
//! ```
//! use mastermind_engine::{GameEngine, Score};
//!
//! let mut engine = GameEngine::new(42);
//! engine.start_game(true, 4, 10, vec!['R', 'G', 'B', 'Y', 'O', 'P'])?;
//!
//! engine.insert_all(vec!['R', 'R', 'G', 'G'])?;
//! let score: Score = engine.submit()?;
//!
//! assert_eq!(engine.exacts(0)?, Some(score.exacts));
//! assert_eq!(engine.score()?, 1);
//! # Ok::<(), mastermind_engine::EngineError>(())
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{
    EngineError, EngineResult, GameConfig, GameRng, GameRngState, Outcome, Session, Symbol,
};

use super::scoring::Score;

/// Rules engine for a game of Mastermind over symbols `K`.
///
/// Cloning is cheap: rounds are held in a persistent vector.
#[derive(Clone, Debug)]
pub struct GameEngine<K: Symbol> {
    session: Option<Session<K>>,
    rng: GameRng,
}

impl<K: Symbol> Default for GameEngine<K> {
    fn default() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }
}

impl<K: Symbol> GameEngine<K> {
    /// Create an engine whose secrets are determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create an engine drawing secrets from `rng`.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { session: None, rng }
    }

    // === Lifecycle ===

    /// Start a new game, discarding any previous one.
    ///
    /// Fails with [`EngineError::InvalidArgument`] if `resources` is empty,
    /// `length` is zero, or `length` exceeds the pool without duplicates.
    /// A `guesses` of zero means unlimited guesses.
    pub fn start_game(
        &mut self,
        duplicates_allowed: bool,
        length: usize,
        guesses: usize,
        resources: Vec<K>,
    ) -> EngineResult<()> {
        self.start(GameConfig::new(length, guesses, resources).duplicates(duplicates_allowed))
    }

    /// Start a new game from a full configuration.
    pub fn start(&mut self, config: GameConfig<K>) -> EngineResult<()> {
        config.validate()?;

        let pool = config.resources.len();
        let indices = if config.duplicates_allowed {
            self.rng.draw_with_replacement(pool, config.sequence_length)
        } else {
            self.rng.draw_distinct(pool, config.sequence_length)
        };
        let secret = indices
            .into_iter()
            .map(|i| config.resources[i].clone())
            .collect();

        debug!(
            "starting game: length={} guesses={} pool={} duplicates={}",
            config.sequence_length, config.max_guesses, pool, config.duplicates_allowed
        );
        self.session = Some(Session::new(config, secret));
        Ok(())
    }

    /// Has a game been started?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// The running session.
    pub fn session(&self) -> EngineResult<&Session<K>> {
        self.session
            .as_ref()
            .ok_or_else(|| EngineError::state("game has not started"))
    }

    fn session_mut(&mut self) -> EngineResult<&mut Session<K>> {
        self.session
            .as_mut()
            .ok_or_else(|| EngineError::state("game has not started"))
    }

    // === Moves ===

    /// Put `guess` at position `pos` of the current round, replacing any
    /// symbol already there.
    pub fn insert(&mut self, pos: usize, guess: K) -> EngineResult<()> {
        self.session_mut()?.insert(pos, guess)
    }

    /// Replace the entire current guess.
    ///
    /// `guesses` must hold exactly `sequence_length` symbols.
    pub fn insert_all(&mut self, guesses: Vec<K>) -> EngineResult<()> {
        self.session_mut()?.insert_all(guesses)
    }

    /// Empty position `pos` of the current round.
    pub fn clear(&mut self, pos: usize) -> EngineResult<()> {
        self.session_mut()?.clear(pos)
    }

    /// Submit the current round for scoring.
    ///
    /// Fails with [`EngineError::InvalidState`] if the game is not running
    /// or any slot is still empty.
    pub fn submit(&mut self) -> EngineResult<Score> {
        self.session_mut()?.submit()
    }

    // === Queries ===

    /// Exact matches for `round`, or `None` if it has not been submitted.
    pub fn exacts(&self, round: usize) -> EngineResult<Option<usize>> {
        Ok(self.score_at(round)?.map(|s| s.exacts))
    }

    /// Inexact matches for `round`, or `None` if it has not been submitted.
    pub fn inexacts(&self, round: usize) -> EngineResult<Option<usize>> {
        Ok(self.score_at(round)?.map(|s| s.inexacts))
    }

    /// Full score for `round`, or `None` if it has not been submitted.
    pub fn score_at(&self, round: usize) -> EngineResult<Option<Score>> {
        Ok(self.session()?.round(round)?.score())
    }

    /// Guesses remaining, `None` for an unlimited game.
    pub fn guesses_left(&self) -> EngineResult<Option<usize>> {
        Ok(self.session()?.guesses_left())
    }

    /// Copy of the guess buffer for `round`.
    ///
    /// Always `sequence_length` long; empty slots are `None`.
    pub fn sequence(&self, round: usize) -> EngineResult<Vec<Option<K>>> {
        Ok(self.session()?.round(round)?.to_vec())
    }

    /// Number of guesses submitted so far.
    pub fn score(&self) -> EngineResult<usize> {
        Ok(self.session()?.submitted())
    }

    /// The resource pool of the running game.
    pub fn resources(&self) -> EngineResult<&[K]> {
        Ok(&self.session()?.config().resources)
    }

    /// Has the game ended, by a win or by running out of guesses?
    pub fn is_game_over(&self) -> EngineResult<bool> {
        Ok(self.session()?.is_over())
    }

    /// Index of the round that inserts go to.
    pub fn current_round(&self) -> EngineResult<usize> {
        Ok(self.session()?.current_round())
    }

    /// Configuration of the running game.
    pub fn config(&self) -> EngineResult<&GameConfig<K>> {
        Ok(self.session()?.config())
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> EngineResult<Outcome> {
        Ok(self.session()?.outcome())
    }

    /// The secret, once the game is over.
    #[must_use]
    pub fn reveal(&self) -> Option<&[K]> {
        self.session
            .as_ref()
            .filter(|s| s.is_over())
            .map(Session::secret)
    }

    // === Checkpoints ===

    /// Capture the session and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<K> {
        GameSnapshot {
            session: self.session.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Fails with [`EngineError::InvalidArgument`] if the captured session
    /// is inconsistent, e.g. a hand-edited or corrupted snapshot.
    pub fn restore(snapshot: &GameSnapshot<K>) -> EngineResult<Self> {
        if let Some(session) = &snapshot.session {
            session.validate()?;
        }
        Ok(Self {
            session: snapshot.session.clone(),
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

/// Serializable capture of a whole engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Symbol + Serialize",
    deserialize = "K: Symbol + Deserialize<'de>"
))]
pub struct GameSnapshot<K: Symbol> {
    /// Session at capture time, `None` if no game had started.
    pub session: Option<Session<K>>,
    /// RNG position, so later secrets match.
    pub rng: GameRngState,
}
