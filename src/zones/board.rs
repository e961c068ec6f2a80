//! The cards currently in play.
//!
//! The board is an ordered, index-addressable zone. Indices are what the UI
//! layer uses to address cards, so removal keeps the relative order of the
//! surviving cards and new cards are always appended.

use crate::cards::Card;
use crate::core::error::{EngineError, Result};

/// Ordered sequence of visible cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding exactly `cards`, in order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Copy of the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Overwrite the card at `index`, returning the previous card.
    pub fn set(&mut self, index: usize, card: Card) -> Result<Card> {
        let len = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(EngineError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, card))
    }

    /// Append cards to the end of the board.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Check that three indices are in bounds and pairwise distinct.
    pub fn check_triple(&self, indices: [usize; 3]) -> Result<()> {
        let len = self.cards.len();
        for (position, &index) in indices.iter().enumerate() {
            if index >= len {
                return Err(EngineError::IndexOutOfBounds { index, len });
            }
            if indices[..position].contains(&index) {
                return Err(EngineError::DuplicateIndex(index));
            }
        }
        Ok(())
    }

    /// Remove the cards at three distinct indices.
    ///
    /// Surviving cards keep their relative order. On error the board is
    /// left untouched. Returns the removed cards in argument order.
    pub fn remove_triple(&mut self, indices: [usize; 3]) -> Result<[Card; 3]> {
        self.check_triple(indices)?;

        let removed = indices.map(|index| self.cards[index]);
        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });

        Ok(removed)
    }
}
