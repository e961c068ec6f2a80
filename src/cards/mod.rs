//! Card values and their attribute dimensions.
//!
//! ## Key Types
//!
//! - `Card`: Immutable value with four ternary attributes
//! - `Attribute`: The four dimensions (shape, color, number, shading)

pub mod attributes;
pub mod card;

pub use attributes::{Attribute, VALUES_PER_ATTRIBUTE};
pub use card::{Card, ATLAS_SIDE, UNIVERSE_SIZE};
