//! Card locations: the deck and the board.
//!
//! ## Key Types
//!
//! - `Deck`: Undealt cards, drawn from the top
//! - `Board`: Visible cards, addressed by index
//!
//! Removed cards leave play entirely; there is no discard zone.

pub mod board;
pub mod deck;

pub use board::Board;
pub use deck::Deck;
