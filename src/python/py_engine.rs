//! Engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{EngineError, EngineResult};
use crate::rules::{GameEngine, Score};

/// Map an optional count to the `-1` convention Python callers expect.
fn or_sentinel(count: Option<usize>) -> i64 {
    count.map_or(-1, |n| n as i64)
}

/// Convert a Python int to a count or index, rejecting negatives as
/// invalid arguments rather than letting pyo3 raise `OverflowError`.
fn non_negative(value: i64, name: &str) -> EngineResult<usize> {
    usize::try_from(value)
        .map_err(|_| EngineError::argument(format!("{name} must not be negative, got {value}")))
}

/// Python wrapper for Score.
#[pyclass(name = "Score")]
#[derive(Clone, Debug)]
pub struct PyScore(pub Score);

#[pymethods]
impl PyScore {
    #[getter]
    fn exacts(&self) -> usize {
        self.0.exacts
    }

    #[getter]
    fn inexacts(&self) -> usize {
        self.0.inexacts
    }

    fn __repr__(&self) -> String {
        format!("Score(exacts={}, inexacts={})", self.0.exacts, self.0.inexacts)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python wrapper for a GameEngine over integer symbols.
#[pyclass(name = "Mastermind")]
pub struct PyMastermind {
    engine: GameEngine<i64>,
}

#[pymethods]
impl PyMastermind {
    /// Create an engine. Without a seed, secrets come from OS entropy.
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::new(seed),
            None => GameEngine::default(),
        };
        Self { engine }
    }

    /// Start a new game. `guesses=0` means unlimited.
    fn start_game(
        &mut self,
        duplicates: bool,
        length: i64,
        guesses: i64,
        resources: Vec<i64>,
    ) -> PyResult<()> {
        let length = non_negative(length, "length")?;
        let guesses = non_negative(guesses, "guesses")?;
        Ok(self.engine.start_game(duplicates, length, guesses, resources)?)
    }

    fn insert(&mut self, pos: i64, guess: i64) -> PyResult<()> {
        let pos = non_negative(pos, "position")?;
        Ok(self.engine.insert(pos, guess)?)
    }

    fn insert_all(&mut self, guesses: Vec<i64>) -> PyResult<()> {
        Ok(self.engine.insert_all(guesses)?)
    }

    fn clear(&mut self, pos: i64) -> PyResult<()> {
        let pos = non_negative(pos, "position")?;
        Ok(self.engine.clear(pos)?)
    }

    /// Submit the current round. Returns `(exacts, inexacts)`.
    fn submit(&mut self) -> PyResult<(usize, usize)> {
        let score = self.engine.submit()?;
        Ok((score.exacts, score.inexacts))
    }

    /// Exacts for `round`, or -1 if not yet submitted.
    fn exacts(&self, round: i64) -> PyResult<i64> {
        let round = non_negative(round, "round")?;
        Ok(or_sentinel(self.engine.exacts(round)?))
    }

    /// Inexacts for `round`, or -1 if not yet submitted.
    fn inexacts(&self, round: i64) -> PyResult<i64> {
        let round = non_negative(round, "round")?;
        Ok(or_sentinel(self.engine.inexacts(round)?))
    }

    fn score_at(&self, round: i64) -> PyResult<Option<PyScore>> {
        let round = non_negative(round, "round")?;
        Ok(self.engine.score_at(round)?.map(PyScore))
    }

    /// Remaining guesses, `None` when unlimited.
    fn guesses_left(&self) -> PyResult<Option<usize>> {
        Ok(self.engine.guesses_left()?)
    }

    fn sequence(&self, round: i64) -> PyResult<Vec<Option<i64>>> {
        let round = non_negative(round, "round")?;
        Ok(self.engine.sequence(round)?)
    }

    fn score(&self) -> PyResult<usize> {
        Ok(self.engine.score()?)
    }

    fn resources(&self) -> PyResult<Vec<i64>> {
        Ok(self.engine.resources()?.to_vec())
    }

    fn is_game_over(&self) -> PyResult<bool> {
        Ok(self.engine.is_game_over()?)
    }

    fn is_started(&self) -> bool {
        self.engine.is_started()
    }

    fn current_round(&self) -> PyResult<usize> {
        Ok(self.engine.current_round()?)
    }

    /// The secret, once the game is over.
    fn reveal(&self) -> Option<Vec<i64>> {
        self.engine.reveal().map(<[i64]>::to_vec)
    }

    fn __repr__(&self) -> String {
        match (self.engine.score(), self.engine.is_game_over()) {
            (Ok(score), Ok(over)) => format!("Mastermind(guesses={score}, over={over})"),
            _ => "Mastermind(not started)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_sentinel() {
        assert_eq!(or_sentinel(None), -1);
        assert_eq!(or_sentinel(Some(0)), 0);
        assert_eq!(or_sentinel(Some(3)), 3);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(0, "round"), Ok(0));
        assert_eq!(non_negative(7, "position"), Ok(7));

        let err = non_negative(-1, "position").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("position"));
    }
}
