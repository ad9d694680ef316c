//! A single guess attempt.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::rules::Score;

/// Inline capacity for guess buffers. Classic boards use 4-6 pegs.
const INLINE_SLOTS: usize = 8;

/// Slot storage for one round. `None` marks an empty slot.
pub type GuessBuffer<K> = SmallVec<[Option<K>; INLINE_SLOTS]>;

/// One round of play: a guess buffer and, once submitted, its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize",
    deserialize = "K: Deserialize<'de>"
))]
pub struct Round<K> {
    guess: GuessBuffer<K>,
    score: Option<Score>,
}

impl<K: Clone> Round<K> {
    /// Create an empty round with `length` unfilled slots.
    #[must_use]
    pub fn empty(length: usize) -> Self {
        Self {
            guess: SmallVec::from_elem(None, length),
            score: None,
        }
    }

    /// Copy the guess buffer out.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<K>> {
        self.guess.to_vec()
    }
}

impl<K> Round<K> {
    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guess.len()
    }

    /// True for a zero-slot round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guess.is_empty()
    }

    /// The slot buffer.
    #[must_use]
    pub fn slots(&self) -> &[Option<K>] {
        &self.guess
    }

    /// Symbol at `pos`, if filled.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&K> {
        self.guess.get(pos).and_then(Option::as_ref)
    }

    /// Are all slots filled?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.guess.iter().all(Option::is_some)
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.guess.iter().filter(|slot| slot.is_some()).count()
    }

    /// Has this round been submitted?
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.score.is_some()
    }

    /// Stored score, if submitted.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Iterate the filled symbols, in slot order.
    pub fn symbols(&self) -> impl Iterator<Item = &K> {
        self.guess.iter().flatten()
    }

    pub(crate) fn set(&mut self, pos: usize, value: Option<K>) {
        self.guess[pos] = value;
    }

    pub(crate) fn fill(&mut self, values: impl IntoIterator<Item = K>) {
        self.guess = values.into_iter().map(Some).collect();
    }

    pub(crate) fn record(&mut self, score: Score) {
        self.score = Some(score);
    }
}
