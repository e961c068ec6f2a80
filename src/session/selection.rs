//! Manual three-card selection, as driven by a UI.
//!
//! The player picks cards one at a time. Once three are picked the
//! selection is submitted: a match is removed from the board, anything
//! else is marked rejected and left on screen until its timeout runs out.
//! Time is always passed in, so the timeout can be tested without a clock.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use set_engine::core::SessionConfig;
//! use set_engine::session::{GameSession, Selection, SelectionOutcome};
//!
//! let mut session = GameSession::new(SessionConfig::new().with_seed(3));
//! let mut selection = Selection::for_session(&session);
//!
//! selection.toggle(0);
//! selection.toggle(1);
//! let now = Instant::now();
//! assert_eq!(selection.submit(&mut session, now).unwrap(), SelectionOutcome::Incomplete);
//!
//! selection.toggle(2);
//! if selection.submit(&mut session, now).unwrap() == SelectionOutcome::Rejected {
//!     assert!(selection.expire(now + Duration::from_secs(1)));
//!     assert!(selection.picks().is_empty());
//! }
//! ```

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use super::game::GameSession;
use crate::core::Result;
use crate::rules::MatchTriple;

/// Result of submitting a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Fewer than three cards picked; nothing happened.
    Incomplete,
    /// The picks formed a match and were removed from the board.
    Matched(MatchTriple),
    /// The picks do not form a match; they stay selected until expiry.
    Rejected,
}

/// Up to three picked board indices, plus rejection timing.
#[derive(Clone, Debug)]
pub struct Selection {
    picks: SmallVec<[usize; 3]>,
    rejected_at: Option<Instant>,
    timeout: Duration,
}

impl Selection {
    /// Create an empty selection with the given rejection timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            picks: SmallVec::new(),
            rejected_at: None,
            timeout,
        }
    }

    /// Create an empty selection using the session's configured timeout.
    #[must_use]
    pub fn for_session(session: &GameSession) -> Self {
        Self::new(session.config().selection_timeout)
    }

    /// Picked indices, in pick order.
    #[must_use]
    pub fn picks(&self) -> &[usize] {
        &self.picks
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.picks.contains(&index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.picks.len() == 3
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejected_at.is_some()
    }

    /// Pick `index`, or unpick it if already picked.
    ///
    /// A fourth pick is ignored. Any change clears a pending rejection.
    /// Returns whether `index` is picked afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if let Some(position) = self.picks.iter().position(|&picked| picked == index) {
            self.picks.remove(position);
            self.rejected_at = None;
            false
        } else if self.picks.len() < 3 {
            self.picks.push(index);
            self.rejected_at = None;
            true
        } else {
            false
        }
    }

    /// Drop every pick.
    pub fn clear(&mut self) {
        self.picks.clear();
        self.rejected_at = None;
    }

    /// Try to claim the picked cards as a match.
    ///
    /// Resubmitting a rejected selection keeps the original rejection time.
    pub fn submit(&mut self, session: &mut GameSession, now: Instant) -> Result<SelectionOutcome> {
        let [i, j, k] = match self.picks.as_slice() {
            &[i, j, k] => [i, j, k],
            _ => return Ok(SelectionOutcome::Incomplete),
        };

        if session.claim_match(i, j, k)? {
            let mut sorted = [i, j, k];
            sorted.sort_unstable();
            self.clear();
            return Ok(SelectionOutcome::Matched(MatchTriple(sorted)));
        }

        self.rejected_at.get_or_insert(now);
        Ok(SelectionOutcome::Rejected)
    }

    /// Clear a rejected selection once its timeout has passed.
    ///
    /// Returns whether the selection was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.rejected_at {
            Some(rejected_at) if now.saturating_duration_since(rejected_at) >= self.timeout => {
                log::trace!("rejected selection {:?} expired", self.picks);
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Drop picks that no longer address a board card.
    pub fn retain_in_bounds(&mut self, board_len: usize) {
        let before = self.picks.len();
        self.picks.retain(|index| *index < board_len);
        if self.picks.len() != before {
            self.rejected_at = None;
        }
    }
}
