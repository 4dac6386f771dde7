//! Equality predicate on the item's color attribute.

use super::Predicate;
use crate::item::{Color, Item};

/// Satisfied when the item's color equals the stored color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPredicate {
    color: Color,
}

impl ColorPredicate {
    /// Create a predicate matching items of the given color.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Predicate for ColorPredicate {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        item.color() == self.color
    }
}
