//! Deterministic random number generation for secret sequences.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical secrets
//! - **Injectable**: Engines take a `GameRng`, so tests can pin the seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use mastermind_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.draw_with_replacement(6, 4), b.draw_with_replacement(6, 4));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to generate secrets.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Draw `amount` indices into a pool of `pool_len`, each independently.
    ///
    /// Indices may repeat. Returns an empty vec when `pool_len` is 0.
    pub fn draw_with_replacement(&mut self, pool_len: usize, amount: usize) -> Vec<usize> {
        if pool_len == 0 {
            return Vec::new();
        }
        (0..amount).map(|_| self.gen_range_usize(0..pool_len)).collect()
    }

    /// Draw `amount` distinct indices into a pool of `pool_len`.
    ///
    /// Every ordered selection is equally likely. `amount` is clamped to
    /// `pool_len`.
    pub fn draw_distinct(&mut self, pool_len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(pool_len);
        rand::seq::index::sample(&mut self.inner, pool_len, amount).into_vec()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
