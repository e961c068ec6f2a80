//! Core engine types: RNG, configuration, errors.
//!
//! These are the game-independent building blocks the rest of the engine
//! is assembled from.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SeedPolicy, SessionConfig};
pub use error::{EngineError, Result};
pub use rng::GameRng;
