//! Hint visibility and the triple it points at.

use serde::{Deserialize, Serialize};

use crate::rules::MatchTriple;

/// Whether a hint is shown, and which match it highlights.
///
/// A hint can be shown with no triple recorded (the board had no match).
/// While hidden, no index is reported as a hint card even if a triple is
/// still recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintState {
    visible: bool,
    triple: Option<MatchTriple>,
}

impl HintState {
    /// Create a hidden hint with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The last recorded hint, whether or not it is visible.
    #[must_use]
    pub fn triple(&self) -> Option<MatchTriple> {
        self.triple
    }

    /// Show the hint, recording `found` as the highlighted match.
    pub fn show(&mut self, found: Option<MatchTriple>) {
        self.visible = true;
        self.triple = found;
    }

    /// Hide the hint. The recorded triple is kept.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether board `index` is part of the visible hint.
    #[must_use]
    pub fn is_hint_card(&self, index: usize) -> bool {
        self.visible && self.triple.is_some_and(|triple| triple.contains(index))
    }
}
