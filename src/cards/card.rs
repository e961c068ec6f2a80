//! Card values.
//!
//! A `Card` is a plain value: four attribute values in `0..3`. Two cards
//! are equal exactly when all four attributes agree, so the 81 possible
//! cards are also the 81 distinct values of this type.
//!
//! ## Atlas Index
//!
//! Renderers locate a card's face in a 9×9 texture grid with
//!
//! ```text
//! index = color * 27 + shading * 9 + shape * 3 + number
//! ```
//!
//! This layout is fixed; `Card::atlas_index` and `Card::from_atlas_index`
//! convert in both directions.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, VALUES_PER_ATTRIBUTE};
use crate::core::error::{EngineError, Result};

/// Number of distinct cards (3^4).
pub const UNIVERSE_SIZE: usize = 81;

/// Width and height of the texture atlas, in cards.
pub const ATLAS_SIDE: usize = 9;

/// A SET card.
///
/// `Default` is the zero card (Diamond, Purple, One, Solid).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCard", into = "RawCard")]
pub struct Card {
    shape: u8,
    color: u8,
    number: u8,
    shading: u8,
}

impl Card {
    /// Create a card, validating that every attribute is in `0..3`.
    pub fn new(shape: u8, color: u8, number: u8, shading: u8) -> Result<Self> {
        for (attribute, value) in Attribute::ALL.into_iter().zip([shape, color, number, shading]) {
            if value >= VALUES_PER_ATTRIBUTE {
                return Err(EngineError::InvalidAttributeValue { attribute, value });
            }
        }
        Ok(Self {
            shape,
            color,
            number,
            shading,
        })
    }

    /// Decode a texture atlas position back into a card.
    pub fn from_atlas_index(index: usize) -> Result<Self> {
        if index >= UNIVERSE_SIZE {
            return Err(EngineError::InvalidAtlasIndex(index));
        }
        Ok(Self::from_atlas_unchecked(index as u8))
    }

    const fn from_atlas_unchecked(index: u8) -> Self {
        Self {
            color: index / 27,
            shading: index / 9 % 3,
            shape: index / 3 % 3,
            number: index % 3,
        }
    }

    /// All 81 cards in atlas order (color, shading, shape, number nested).
    pub fn universe() -> impl Iterator<Item = Card> {
        (0..UNIVERSE_SIZE as u8).map(Self::from_atlas_unchecked)
    }

    #[must_use]
    pub const fn shape(self) -> u8 {
        self.shape
    }

    #[must_use]
    pub const fn color(self) -> u8 {
        self.color
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn shading(self) -> u8 {
        self.shading
    }

    /// Read one attribute dimension.
    #[must_use]
    pub const fn get(self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Shape => self.shape,
            Attribute::Color => self.color,
            Attribute::Number => self.number,
            Attribute::Shading => self.shading,
        }
    }

    /// Copy of this card with one attribute replaced.
    pub fn with(self, attribute: Attribute, value: u8) -> Result<Self> {
        if value >= VALUES_PER_ATTRIBUTE {
            return Err(EngineError::InvalidAttributeValue { attribute, value });
        }
        let mut card = self;
        match attribute {
            Attribute::Shape => card.shape = value,
            Attribute::Color => card.color = value,
            Attribute::Number => card.number = value,
            Attribute::Shading => card.shading = value,
        }
        Ok(card)
    }

    /// Attribute values in `Attribute::ALL` order.
    #[must_use]
    pub const fn attributes(self) -> [u8; 4] {
        [self.shape, self.color, self.number, self.shading]
    }

    /// Position of this card's face in the texture atlas.
    #[must_use]
    pub const fn atlas_index(self) -> usize {
        self.color as usize * 27 + self.shading as usize * 9 + self.shape as usize * 3 + self.number as usize
    }

    /// `(row, column)` of this card's face in the atlas grid.
    #[must_use]
    pub const fn atlas_cell(self) -> (usize, usize) {
        let index = self.atlas_index();
        (index / ATLAS_SIDE, index % ATLAS_SIDE)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = |attribute: Attribute| attribute.value_names()[usize::from(self.get(attribute))];
        write!(
            f,
            "{} {} {} {}",
            name(Attribute::Number),
            name(Attribute::Color),
            name(Attribute::Shading),
            name(Attribute::Shape),
        )
    }
}

/// Unvalidated wire form; deserialization goes through `Card::new`.
#[derive(Serialize, Deserialize)]
struct RawCard {
    shape: u8,
    color: u8,
    number: u8,
    shading: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = EngineError;

    fn try_from(raw: RawCard) -> Result<Self> {
        Card::new(raw.shape, raw.color, raw.number, raw.shading)
    }
}

impl From<Card> for RawCard {
    fn from(card: Card) -> Self {
        Self {
            shape: card.shape,
            color: card.color,
            number: card.number,
            shading: card.shading,
        }
    }
}
