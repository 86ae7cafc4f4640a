//! Seedable RNG for deck construction.
//!
//! Every random decision the engine makes (trimming an oversized image pool,
//! padding a short one, shuffling the deck) is drawn from one `GameRng`, so a
//! recorded seed replays the exact same deal.
//!
//! ```
//! use match_pairs::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut deck_a = vec!["A", "A", "B", "B"];
//! let mut deck_b = deck_a.clone();
//! a.shuffle(&mut deck_a);
//! b.shuffle(&mut deck_b);
//! assert_eq!(deck_a, deck_b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is still recorded, so the game can be replayed via [`seed`](Self::seed).
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Uniformly shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Capture the current stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore an RNG at a captured stream position.
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

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}
