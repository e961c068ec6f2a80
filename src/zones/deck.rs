//! The undealt remainder of the card universe.
//!
//! The deck is an ordered zone: index 0 is the bottom, the last element is
//! the top, and cards are always drawn from the top. Cards never return to
//! the deck once drawn.

use crate::cards::Card;
use crate::core::rng::GameRng;

/// An ordered stack of undealt cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 81 cards in atlas order, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        Self {
            cards: Card::universe().collect(),
        }
    }

    /// All 81 cards in a uniformly random order drawn from `rng`.
    #[must_use]
    pub fn new_shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// A deck holding exactly `cards`, last element on top.
    ///
    /// Used to stage specific puzzle states.
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

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The card that the next draw returns.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Remove up to `count` cards from the top, in draw order.
    ///
    /// Returns fewer than `count` cards (possibly none) when the deck runs
    /// out.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let split = self.cards.len().saturating_sub(count);
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        drawn
    }
}
