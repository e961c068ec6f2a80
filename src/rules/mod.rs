//! Game rules: the match predicate and the board-wide match search.
//!
//! Both are pure functions over card values. `GameSession` calls into them
//! but holds no rule logic of its own.

pub mod enumerator;
pub mod validator;

pub use enumerator::{count_matches, find_all_matches, first_match, matches, MatchTriple};
pub use validator::{complete_match, is_match};
