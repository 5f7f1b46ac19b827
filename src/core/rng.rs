//! Random tie-breaking for the computer player.
//!
//! ## Key Features
//!
//! - **Injectable**: the heuristic only sees the [`RandomSource`] trait
//! - **Deterministic**: [`GameRng`] with the same seed picks the same moves
//! - **Scriptable**: [`SequenceSource`] replays fixed picks in tests
//!
//! ```
//! use rust_ttt::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let corners = [0, 2, 6, 8];
//! assert_eq!(a.choose(&corners), b.choose(&corners));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform choices.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform choice from `items`, `None` when empty.
    fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index).copied()
    }
}

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Each pick is reduced modulo the requested length, so `0` always means
/// "first candidate". Mostly useful in tests.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    picks: Vec<usize>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that replays `picks` in order.
    ///
    /// An empty list behaves like `[0]`.
    #[must_use]
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        let mut picks = picks.into();
        if picks.is_empty() {
            picks.push(0);
        }
        Self { picks, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % len
    }
}
