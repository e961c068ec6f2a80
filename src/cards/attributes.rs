//! The four attribute dimensions of a SET card.
//!
//! Every card has one value in `0..3` for each dimension. The engine only
//! ever compares these values numerically; the names exist for display and
//! for card editors.
//!
//! | Dimension | 0       | 1       | 2        |
//! |-----------|---------|---------|----------|
//! | Shape     | Diamond | Oval    | Squiggle |
//! | Color     | Purple  | Green   | Red      |
//! | Number    | One     | Two     | Three    |
//! | Shading   | Solid   | Striped | Outline  |

use serde::{Deserialize, Serialize};

/// Number of values each attribute can take.
pub const VALUES_PER_ATTRIBUTE: u8 = 3;

/// One attribute dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Shape,
    Color,
    Number,
    Shading,
}

impl Attribute {
    /// All dimensions, in the order `Card::attributes` reports them.
    pub const ALL: [Attribute; 4] = [
        Attribute::Shape,
        Attribute::Color,
        Attribute::Number,
        Attribute::Shading,
    ];

    /// Human-readable dimension name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Shape => "Shape",
            Attribute::Color => "Color",
            Attribute::Number => "Number",
            Attribute::Shading => "Shading",
        }
    }

    /// Display names for values 0, 1 and 2 of this dimension.
    #[must_use]
    pub const fn value_names(self) -> [&'static str; 3] {
        match self {
            Attribute::Shape => ["Diamond", "Oval", "Squiggle"],
            Attribute::Color => ["Purple", "Green", "Red"],
            Attribute::Number => ["One", "Two", "Three"],
            Attribute::Shading => ["Solid", "Striped", "Outline"],
        }
    }

    /// Display name for one value, or `None` if the value is out of range.
    #[must_use]
    pub fn value_name(self, value: u8) -> Option<&'static str> {
        self.value_names().get(usize::from(value)).copied()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
