//! Game session: dealing, removal, hints and statistics.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns one game's deck, board, hint and stats
//! - `HintState`: Shown/hidden flag plus the highlighted match
//! - `GameStats` / `StatsSnapshot`: Monotonic counters and elapsed time
//! - `Selection`: UI-side three-card pick with a rejection timeout

pub mod game;
pub mod hint;
pub mod selection;
pub mod stats;

pub use game::GameSession;
pub use hint::HintState;
pub use selection::{Selection, SelectionOutcome};
pub use stats::{format_elapsed, GameStats, StatsSnapshot};
