//! Guess scoring.
//!
//! A guess is scored against the secret in two passes:
//!
//! 1. **Exacts**: positions where guess and secret hold the same symbol.
//! 2. **Inexacts**: over the remaining (non-exact) positions, count each
//!    symbol in the secret and in the guess; every symbol contributes
//!    `min(secret_count, guess_count)`.
//!
//! The two counts never overlap, so `exacts + inexacts <= length`.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Exact and inexact counts for one submitted guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Right symbol, right position.
    pub exacts: usize,
    /// Right symbol, wrong position.
    pub inexacts: usize,
}

impl Score {
    /// Create a score.
    #[must_use]
    pub const fn new(exacts: usize, inexacts: usize) -> Self {
        Self { exacts, inexacts }
    }

    /// Does this score solve a secret of `length` symbols?
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exacts == length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} inexact", self.exacts, self.inexacts)
    }
}

/// Score `guess` against `secret`.
///
/// Positions past the end of the shorter slice are ignored.
///
/// ```
/// use mastermind_engine::rules::{score, Score};
///
/// let secret = ['A', 'B', 'B', 'C'];
/// let guess = ['B', 'B', 'D', 'D'];
/// assert_eq!(score(&secret, &guess), Score::new(1, 1));
/// ```
#[must_use]
pub fn score<K: Eq + Hash>(secret: &[K], guess: &[K]) -> Score {
    score_pairs(secret.iter().zip(guess))
}

/// Score an iterator of `(secret, guess)` symbol pairs.
pub(crate) fn score_pairs<'a, K, I>(pairs: I) -> Score
where
    K: Eq + Hash + 'a,
    I: IntoIterator<Item = (&'a K, &'a K)>,
{
    let mut exacts = 0;
    let mut secret_counts: FxHashMap<&K, usize> = FxHashMap::default();
    let mut guess_counts: FxHashMap<&K, usize> = FxHashMap::default();

    for (secret, guess) in pairs {
        if secret == guess {
            exacts += 1;
        } else {
            *secret_counts.entry(secret).or_insert(0) += 1;
            *guess_counts.entry(guess).or_insert(0) += 1;
        }
    }

    let inexacts = secret_counts
        .iter()
        .map(|(symbol, &count)| count.min(guess_counts.get(symbol).copied().unwrap_or(0)))
        .sum();

    Score { exacts, inexacts }
}
