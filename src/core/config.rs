//! Session configuration.
//!
//! A `SessionConfig` fixes the dealing sizes, the seeding policy used for
//! each new game, and the timeout after which a rejected selection clears.
//! The defaults reproduce the standard game: 12 cards up, 3 cards per
//! replenish, entropy seeding.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// How each new game obtains its shuffle seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Draw a fresh seed from the OS entropy source for every game.
    #[default]
    Entropy,
    /// Seed the first game with this value; later games fork from it.
    Fixed(u64),
}

impl SeedPolicy {
    /// Build the RNG for the first game of a session.
    #[must_use]
    pub fn initial_rng(self) -> GameRng {
        match self {
            SeedPolicy::Entropy => GameRng::from_entropy(),
            SeedPolicy::Fixed(seed) => GameRng::new(seed),
        }
    }

    /// Build the RNG for a follow-up game, given the session's root RNG.
    #[must_use]
    pub fn next_rng(self, root: &mut GameRng) -> GameRng {
        match self {
            SeedPolicy::Entropy => GameRng::from_entropy(),
            SeedPolicy::Fixed(_) => root.fork(),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Cards dealt when a game starts.
    pub initial_deal: usize,

    /// Cards dealt to replace a removed match (and by `deal_three`).
    pub replenish_count: usize,

    /// Seeding policy for deck shuffles.
    pub seed: SeedPolicy,

    /// How long a rejected three-card selection stays on screen.
    pub selection_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_deal: 12,
            replenish_count: 3,
            seed: SeedPolicy::Entropy,
            selection_timeout: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedPolicy::Fixed(seed);
        self
    }

    /// Set the number of cards in the opening deal.
    #[must_use]
    pub fn with_initial_deal(mut self, count: usize) -> Self {
        self.initial_deal = count;
        self
    }

    /// Set the selection rejection timeout.
    #[must_use]
    pub fn with_selection_timeout(mut self, timeout: Duration) -> Self {
        self.selection_timeout = timeout;
        self
    }
}
