//! # set-engine
//!
//! Rules engine for the card-matching puzzle SET.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: The match predicate and the board-wide search are
//!    free functions over card values, independent of any session state.
//!
//! 2. **Total where the UI needs it**: Dealing from an empty deck deals
//!    nothing; reading a stale index yields `None`. Errors are reserved for
//!    contract violations that would corrupt the board.
//!
//! 3. **Injectable randomness**: Shuffles come from a seedable `GameRng`,
//!    so any game can be replayed from its seed.
//!
//! ## Architecture
//!
//! The UI layer owns a `GameSession` and issues commands to it (new game,
//! deal, toggle hint, remove a match, edit a card), then renders from the
//! values it reads back. Nothing in this crate draws, polls input or
//! persists state.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card values and attribute dimensions
//! - `zones`: Deck and board
//! - `rules`: Match predicate and exhaustive match search
//! - `session`: Game session, hints, stats, selection
//! - `python`: Python bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{EngineError, GameRng, Result, SeedPolicy, SessionConfig};

pub use crate::cards::{Attribute, Card, UNIVERSE_SIZE};

pub use crate::zones::{Board, Deck};

pub use crate::rules::{complete_match, find_all_matches, first_match, is_match, MatchTriple};

pub use crate::session::{
    format_elapsed, GameSession, GameStats, HintState,
    Selection, SelectionOutcome, StatsSnapshot,
};
