//! Seedable random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffle
//! - **Entropy seeding**: Fresh games draw their seed from the OS
//! - **Forkable**: Successive games of a fixed-seed session stay reproducible
//!
//! ## Usage
//!
//! ```
//! use set_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs: Vec<u32> = (0..10).collect();
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to shuffle decks.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// The seed is retained so a game can be replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    ///
    /// The drawn seed is still recorded and available via [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    ///
    /// Each fork produces a different sequence; the same fork counter on
    /// the same seed always produces the same one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (uniform permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
