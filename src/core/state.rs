//! Session state for one game.
//!
//! A `Session` owns everything a single game needs:
//! - The configuration it was started with
//! - The hidden secret sequence
//! - One `Round` per guess slot
//! - The index of the round currently being filled
//! - The game-over flag
//!
//! Rounds live in an `im::Vector`, so cloning a session (and the engine
//! around it) is O(1). Every mutating method validates first and only then
//! touches state, so a failed call changes nothing.

use std::hash::Hash;

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::{EngineError, EngineResult};
use super::round::Round;
use crate::rules::scoring::{score_pairs, Score};

/// Values usable as Mastermind symbols.
///
/// Scoring needs only equality, but symbols must also be `Hash` so inexacts
/// can be tallied per symbol in one pass. Symbols are never ordered.
pub trait Symbol: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Symbol for T {}

/// How a game ended, or that it has not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Still accepting guesses.
    InProgress,
    /// The secret was guessed; `guesses` counts every submission.
    Won { guesses: usize },
    /// All guesses used without a match.
    Lost,
}

/// State of one running (or finished) game.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Symbol + Serialize",
    deserialize = "K: Symbol + Deserialize<'de>"
))]
pub struct Session<K: Symbol> {
    config: GameConfig<K>,
    secret: Vec<K>,
    rounds: Vector<Round<K>>,
    current_round: usize,
    game_over: bool,
}

impl<K: Symbol> Session<K> {
    /// Create a session for a validated config and its generated secret.
    ///
    /// Limited games pre-allocate every round; unlimited games start with one.
    pub(crate) fn new(config: GameConfig<K>, secret: Vec<K>) -> Self {
        let allocated = if config.is_unlimited() { 1 } else { config.max_guesses };
        let rounds = (0..allocated)
            .map(|_| Round::empty(config.sequence_length))
            .collect();

        Self {
            config,
            secret,
            rounds,
            current_round: 0,
            game_over: false,
        }
    }

    // === Queries ===

    /// Configuration this game was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig<K> {
        &self.config
    }

    /// The hidden sequence.
    #[must_use]
    pub fn secret(&self) -> &[K] {
        &self.secret
    }

    /// All allocated rounds, in play order.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round<K>> {
        &self.rounds
    }

    /// Index of the round that inserts target.
    #[must_use]
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Number of rounds submitted so far.
    #[must_use]
    pub fn submitted(&self) -> usize {
        // The cursor stays on the final round once the game ends
        if self.game_over {
            self.current_round + 1
        } else {
            self.current_round
        }
    }

    /// Guesses remaining, or `None` when unlimited.
    #[must_use]
    pub fn guesses_left(&self) -> Option<usize> {
        if self.config.is_unlimited() {
            None
        } else {
            Some(self.config.max_guesses - self.submitted())
        }
    }

    /// Look up a round by index.
    pub fn round(&self, index: usize) -> EngineResult<&Round<K>> {
        self.rounds.get(index).ok_or_else(|| {
            EngineError::argument(format!(
                "round {index} out of range (0..{})",
                self.rounds.len()
            ))
        })
    }

    /// Current result of the game.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.game_over {
            return Outcome::InProgress;
        }
        let solved = self.rounds[self.current_round]
            .score()
            .is_some_and(|s| s.is_solved(self.config.sequence_length));
        if solved {
            Outcome::Won {
                guesses: self.submitted(),
            }
        } else {
            Outcome::Lost
        }
    }

    /// Check the structural invariants of a session built outside the
    /// engine, such as one deserialized from a snapshot.
    ///
    /// Every failure is an [`EngineError::InvalidArgument`].
    pub fn validate(&self) -> EngineResult<()> {
        self.config.validate()?;

        let length = self.config.sequence_length;
        if self.secret.len() != length {
            return Err(EngineError::argument(format!(
                "secret has {} symbols, expected {length}",
                self.secret.len()
            )));
        }

        let expected_rounds = if self.config.is_unlimited() {
            self.current_round + 1
        } else {
            self.config.max_guesses
        };
        if self.rounds.len() != expected_rounds {
            return Err(EngineError::argument(format!(
                "session holds {} rounds, expected {expected_rounds}",
                self.rounds.len()
            )));
        }
        if self.current_round >= self.rounds.len() {
            return Err(EngineError::argument(format!(
                "current round {} out of range (0..{})",
                self.current_round,
                self.rounds.len()
            )));
        }

        for (index, round) in self.rounds.iter().enumerate() {
            if round.len() != length {
                return Err(EngineError::argument(format!(
                    "round {index} has {} slots, expected {length}",
                    round.len()
                )));
            }
            // Rounds before the cursor are played, rounds after it are not,
            // and the cursor's own round is played only once the game ends
            let played = index < self.current_round || (index == self.current_round && self.game_over);
            if round.is_submitted() != played {
                return Err(EngineError::argument(format!(
                    "round {index} submission does not match the current round"
                )));
            }
            if played && !round.is_complete() {
                return Err(EngineError::argument(format!(
                    "round {index} was submitted with empty slots"
                )));
            }
        }

        if self.game_over {
            let last_round = !self.config.is_unlimited() && self.current_round + 1 == self.rounds.len();
            let solved = self.rounds[self.current_round]
                .score()
                .is_some_and(|s| s.is_solved(length));
            if !solved && !last_round {
                return Err(EngineError::argument("game ended before it was won or lost"));
            }
        }

        Ok(())
    }

    // === Mutation ===

    /// Fill (or overwrite) one slot of the current round.
    pub(crate) fn insert(&mut self, pos: usize, value: K) -> EngineResult<()> {
        self.check_open()?;
        self.check_position(pos)?;
        self.check_symbol(&value)?;

        trace!("round {} slot {} filled", self.current_round, pos);
        self.rounds[self.current_round].set(pos, Some(value));
        Ok(())
    }

    /// Replace the whole current guess.
    pub(crate) fn insert_all(&mut self, values: Vec<K>) -> EngineResult<()> {
        self.check_open()?;
        if values.is_empty() {
            return Err(EngineError::argument("guess list is empty"));
        }
        if values.len() != self.config.sequence_length {
            return Err(EngineError::argument(format!(
                "guess has {} symbols, expected {}",
                values.len(),
                self.config.sequence_length
            )));
        }
        for value in &values {
            self.check_symbol(value)?;
        }

        trace!("round {} filled in full", self.current_round);
        self.rounds[self.current_round].fill(values);
        Ok(())
    }

    /// Empty one slot of the current round.
    pub(crate) fn clear(&mut self, pos: usize) -> EngineResult<()> {
        self.check_open()?;
        self.check_position(pos)?;

        self.rounds[self.current_round].set(pos, None);
        Ok(())
    }

    /// Score the current round and advance.
    pub(crate) fn submit(&mut self) -> EngineResult<Score> {
        self.check_open()?;
        let round = &self.rounds[self.current_round];
        if !round.is_complete() {
            return Err(EngineError::state(format!(
                "round {} has {} of {} slots filled",
                self.current_round,
                round.filled(),
                self.config.sequence_length
            )));
        }

        let score = score_pairs(self.secret.iter().zip(round.symbols()));
        self.rounds[self.current_round].record(score);
        debug!("round {} submitted: {}", self.current_round, score);

        let length = self.config.sequence_length;
        let last_round = !self.config.is_unlimited() && self.current_round + 1 >= self.rounds.len();
        if score.is_solved(length) || last_round {
            self.game_over = true;
            debug!("game over after {} guesses: {:?}", self.submitted(), self.outcome());
        } else {
            if self.config.is_unlimited() {
                self.rounds.push_back(Round::empty(length));
            }
            self.current_round += 1;
        }

        Ok(score)
    }

    // === Checks ===

    fn check_open(&self) -> EngineResult<()> {
        if self.game_over {
            return Err(EngineError::state("game is over"));
        }
        Ok(())
    }

    fn check_position(&self, pos: usize) -> EngineResult<()> {
        if pos >= self.config.sequence_length {
            return Err(EngineError::argument(format!(
                "position {pos} out of range (0..{})",
                self.config.sequence_length
            )));
        }
        Ok(())
    }

    fn check_symbol(&self, value: &K) -> EngineResult<()> {
        if self.config.strict_resources && !self.config.resources.contains(value) {
            return Err(EngineError::argument("symbol is not in the resource pool"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(max_guesses: usize) -> Session<char> {
        let config = GameConfig::new(3, max_guesses, vec!['A', 'B', 'C', 'D']);
        Session::new(config, vec!['A', 'B', 'C'])
    }

    #[test]
    fn test_new_allocates_rounds() {
        let s = session(5);
        assert_eq!(s.rounds().len(), 5);
        assert_eq!(s.current_round(), 0);
        assert_eq!(s.submitted(), 0);
        assert_eq!(s.guesses_left(), Some(5));
        assert!(!s.is_over());
        assert_eq!(s.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_unlimited_allocates_on_demand() {
        let mut s = session(0);
        assert_eq!(s.rounds().len(), 1);
        assert_eq!(s.guesses_left(), None);

        s.insert_all(vec!['D', 'D', 'D']).unwrap();
        s.submit().unwrap();

        assert_eq!(s.rounds().len(), 2);
        assert_eq!(s.current_round(), 1);
        assert!(s.round(1).is_ok());
        assert!(s.round(2).is_err());
    }

    #[test]
    fn test_submit_requires_full_guess() {
        let mut s = session(3);
        s.insert(0, 'A').unwrap();
        s.insert(2, 'C').unwrap();

        let err = s.submit().unwrap_err();
        assert!(err.is_invalid_state());
        assert!(!s.round(0).unwrap().is_submitted());
    }

    #[test]
    fn test_win_stops_early() {
        let mut s = session(3);
        s.insert_all(vec!['A', 'B', 'C']).unwrap();
        let score = s.submit().unwrap();

        assert_eq!(score, Score::new(3, 0));
        assert!(s.is_over());
        assert_eq!(s.submitted(), 1);
        assert_eq!(s.guesses_left(), Some(2));
        assert_eq!(s.outcome(), Outcome::Won { guesses: 1 });
    }

    #[test]
    fn test_loss_on_last_round() {
        let mut s = session(2);
        for _ in 0..2 {
            s.insert_all(vec!['C', 'A', 'B']).unwrap();
            s.submit().unwrap();
        }

        assert!(s.is_over());
        assert_eq!(s.current_round(), 1);
        assert_eq!(s.submitted(), 2);
        assert_eq!(s.guesses_left(), Some(0));
        assert_eq!(s.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_insert_all_length_mismatch_keeps_buffer() {
        let mut s = session(3);
        s.insert(0, 'B').unwrap();

        assert!(s.insert_all(vec!['A', 'B']).unwrap_err().is_invalid_argument());
        assert!(s.insert_all(vec![]).unwrap_err().is_invalid_argument());
        assert_eq!(s.round(0).unwrap().to_vec(), vec![Some('B'), None, None]);
    }

    #[test]
    fn test_strict_symbol_check() {
        let config = GameConfig::new(2, 4, vec![1, 2, 3]).strict_resources();
        let mut s = Session::new(config, vec![1, 2]);

        assert!(s.insert(0, 9).unwrap_err().is_invalid_argument());
        assert!(s.insert_all(vec![1, 9]).unwrap_err().is_invalid_argument());
        assert!(s.insert(0, 3).is_ok());
    }

    #[test]
    fn test_clear_slot() {
        let mut s = session(3);
        s.insert_all(vec!['A', 'B', 'C']).unwrap();
        s.clear(1).unwrap();

        assert_eq!(s.round(0).unwrap().to_vec(), vec![Some('A'), None, Some('C')]);
        assert!(s.clear(3).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_played_sessions() {
        let mut s = session(2);
        assert!(s.validate().is_ok());

        s.insert_all(vec!['C', 'A', 'B']).unwrap();
        s.submit().unwrap();
        assert!(s.validate().is_ok());

        s.insert_all(vec!['A', 'B', 'C']).unwrap();
        s.submit().unwrap();
        assert!(s.validate().is_ok());

        let mut unlimited = session(0);
        for _ in 0..3 {
            unlimited.insert_all(vec!['D', 'D', 'D']).unwrap();
            unlimited.submit().unwrap();
        }
        assert!(unlimited.validate().is_ok());
    }

    #[test]
    fn test_validate_cursor_out_of_range() {
        let mut s = session(2);
        s.current_round = 5;
        assert!(s.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_round_count() {
        let mut s = session(2);
        s.rounds.push_back(Round::empty(3));
        assert!(s.validate().unwrap_err().is_invalid_argument());

        let mut s = session(0);
        s.rounds.push_back(Round::empty(3));
        assert!(s.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_short_round() {
        let mut s = session(2);
        s.rounds[1] = Round::empty(1);
        assert!(s.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_secret_length() {
        let mut s = session(2);
        s.secret.pop();
        assert!(s.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_submission_order() {
        // Cursor moved without a submitted round behind it
        let mut s = session(3);
        s.current_round = 1;
        assert!(s.validate().unwrap_err().is_invalid_argument());

        // Over without a win on a round that was not the last
        let mut s = session(3);
        s.insert_all(vec!['C', 'A', 'B']).unwrap();
        s.submit().unwrap();
        s.current_round = 0;
        s.game_over = true;
        assert!(s.validate().unwrap_err().is_invalid_argument());
    }
}
