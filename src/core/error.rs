//! Engine error type.
//!
//! Most engine operations are total: dealing from an empty deck yields an
//! empty deal and `card_at` returns `None` instead of failing. Errors are
//! reserved for caller contract violations that would otherwise corrupt
//! board order, and for out-of-range attribute values.

use thiserror::Error;

use crate::cards::Attribute;

/// Errors reported by the engine.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A board index past the end of the board.
    #[error("board index {index} out of range for board of {len} cards")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The same board index was given more than once.
    #[error("board index {0} given more than once")]
    DuplicateIndex(usize),

    /// An attribute value outside `0..3`.
    #[error("{attribute} value {value} is not in 0..3")]
    InvalidAttributeValue { attribute: Attribute, value: u8 },

    /// A texture atlas position outside `0..81`.
    #[error("atlas index {0} is not in 0..81")]
    InvalidAtlasIndex(usize),
}

pub type Result<T> = std::result::Result<T, EngineError>;
