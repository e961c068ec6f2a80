//! Game session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::SessionConfig;
use crate::session::{GameSession, StatsSnapshot};

use super::py_core::PyCard;

/// Python view of the game statistics.
#[pyclass(name = "Stats", get_all)]
#[derive(Clone, Debug)]
pub struct PyStats {
    /// Elapsed time as "MM:SS".
    pub elapsed: String,
    pub sets_found: u32,
    pub hints_used: u32,
    pub cards_dealt: u32,
}

impl From<StatsSnapshot> for PyStats {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            elapsed: snapshot.elapsed_display(),
            sets_found: snapshot.sets_found,
            hints_used: snapshot.hints_used,
            cards_dealt: snapshot.cards_dealt,
        }
    }
}

#[pymethods]
impl PyStats {
    fn __repr__(&self) -> String {
        format!(
            "Stats(elapsed={}, sets_found={}, hints_used={}, cards_dealt={})",
            self.elapsed, self.sets_found, self.hints_used, self.cards_dealt
        )
    }
}

/// Python wrapper for GameSession.
///
/// A SET game for driving from a Python UI.
#[pyclass(name = "SetGame")]
pub struct PySetGame {
    session: GameSession,
}

#[pymethods]
impl PySetGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - seed: Shuffle seed; omit to seed from OS entropy
    /// - initial_deal: Cards dealt at the start of each game
    #[new]
    #[pyo3(signature = (seed = None, initial_deal = 12))]
    fn new(seed: Option<u64>, initial_deal: usize) -> Self {
        let mut config = SessionConfig::new().with_initial_deal(initial_deal);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Self {
            session: GameSession::new(config),
        }
    }

    /// Replace the current game with a fresh one.
    fn new_game(&mut self) {
        self.session.new_game();
    }

    /// Deal up to `count` cards. Returns the number dealt.
    fn deal(&mut self, count: usize) -> usize {
        self.session.deal(count)
    }

    /// Deal three more cards. Returns the number dealt.
    fn deal_three(&mut self) -> usize {
        self.session.deal_three()
    }

    /// Show or hide the hint. Returns the new visibility.
    fn toggle_hint(&mut self) -> bool {
        self.session.toggle_hint()
    }

    fn is_hint_card(&self, index: usize) -> bool {
        self.session.is_hint_card(index)
    }

    /// All matches on the board as (i, j, k) tuples, ascending.
    fn find_all_matches(&self) -> Vec<(usize, usize, usize)> {
        self.session
            .find_all_matches()
            .into_iter()
            .map(|triple| {
                let [i, j, k] = triple.indices();
                (i, j, k)
            })
            .collect()
    }

    /// Whether the cards at three board positions form a match.
    fn is_match(&self, i: usize, j: usize, k: usize) -> PyResult<bool> {
        Ok(self.session.is_match_at(i, j, k)?)
    }

    /// Remove three cards and replenish. Returns the number of cards dealt.
    fn remove_match(&mut self, i: usize, j: usize, k: usize) -> PyResult<usize> {
        Ok(self.session.remove_match(i, j, k)?)
    }

    /// Remove three cards only if they form a match.
    fn claim_match(&mut self, i: usize, j: usize, k: usize) -> PyResult<bool> {
        Ok(self.session.claim_match(i, j, k)?)
    }

    /// The board, in order.
    fn board(&self) -> Vec<PyCard> {
        self.session.board().iter().copied().map(PyCard).collect()
    }

    /// The board as an (N, 4) uint8 array: shape, color, number, shading.
    fn board_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let flat: Vec<u8> = self
            .session
            .board()
            .iter()
            .flat_map(|card| card.attributes())
            .collect();
        PyArray1::from_slice_bound(py, &flat).reshape([self.session.board().len(), 4])
    }

    fn card_at(&self, index: usize) -> Option<PyCard> {
        self.session.card_at(index).map(PyCard)
    }

    fn set_card_at(&mut self, index: usize, card: &PyCard) -> PyResult<()> {
        Ok(self.session.set_card_at(index, card.0)?)
    }

    #[getter]
    fn deck_size(&self) -> usize {
        self.session.deck_size()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.session.seed()
    }

    fn stats(&self) -> PyStats {
        self.session.stats().into()
    }

    fn __repr__(&self) -> String {
        format!(
            "SetGame(board={}, deck={}, sets_found={})",
            self.session.board().len(),
            self.session.deck_size(),
            self.session.stats().sets_found
        )
    }
}
