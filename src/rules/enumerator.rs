//! Exhaustive match search over a board.
//!
//! Every unordered triple of positions `i < j < k` is tested, in
//! lexicographic order. That order is part of the contract: the hint
//! shows the first match found, i.e. the lexicographically smallest one.
//!
//! Cost is C(n, 3) rule checks, which is 220 for a standard 12-card board
//! and stays small for any board the game can produce.

use serde::{Deserialize, Serialize};

use super::validator::is_match;
use crate::cards::Card;

/// Board positions of a match, ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchTriple(pub [usize; 3]);

impl MatchTriple {
    /// The three board indices.
    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Whether `index` is one of the three positions.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for MatchTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [i, j, k] = self.0;
        write!(f, "({}, {}, {})", i, j, k)
    }
}

/// Iterate over every match on `board` in lexicographic order.
pub fn matches(board: &[Card]) -> impl Iterator<Item = MatchTriple> + '_ {
    let n = board.len();
    (0..n).flat_map(move |i| {
        (i + 1..n).flat_map(move |j| {
            (j + 1..n)
                .filter(move |&k| is_match(&board[i], &board[j], &board[k]))
                .map(move |k| MatchTriple([i, j, k]))
        })
    })
}

/// All matches on `board`, lexicographically ascending.
#[must_use]
pub fn find_all_matches(board: &[Card]) -> Vec<MatchTriple> {
    matches(board).collect()
}

/// The lexicographically smallest match, stopping at the first hit.
#[must_use]
pub fn first_match(board: &[Card]) -> Option<MatchTriple> {
    matches(board).next()
}

/// Number of matches on `board`.
#[must_use]
pub fn count_matches(board: &[Card]) -> usize {
    matches(board).count()
}
