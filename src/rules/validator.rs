//! The SET matching rule.
//!
//! Three cards form a match when, for each of the four attributes, the
//! three values are either all equal or all different. With values in
//! `0..3` this is the same as every per-attribute sum being divisible by
//! three, which is how it is computed here.

use crate::cards::{Attribute, Card, VALUES_PER_ATTRIBUTE};

/// Whether three cards form a match.
///
/// Symmetric in its arguments.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::rules::is_match;
///
/// let a = Card::new(0, 0, 0, 0).unwrap();
/// let b = Card::new(1, 1, 1, 0).unwrap();
/// let c = Card::new(2, 2, 2, 0).unwrap();
/// assert!(is_match(&a, &b, &c));
/// ```
#[must_use]
pub fn is_match(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .into_iter()
        .all(|attribute| (a.get(attribute) + b.get(attribute) + c.get(attribute)) % VALUES_PER_ATTRIBUTE == 0)
}

/// The unique card that completes a match with `a` and `b`.
///
/// If `a == b` the result is that same card, which can never appear twice
/// in one deal.
#[must_use]
pub fn complete_match(a: &Card, b: &Card) -> Card {
    let [shape, color, number, shading] = Attribute::ALL.map(|attribute| {
        let sum = a.get(attribute) + b.get(attribute);
        (VALUES_PER_ATTRIBUTE - sum % VALUES_PER_ATTRIBUTE) % VALUES_PER_ATTRIBUTE
    });
    Card::new(shape, color, number, shading).unwrap_or_default()
}
