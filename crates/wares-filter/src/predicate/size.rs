//! Equality predicate on the item's size attribute.

use super::Predicate;
use crate::item::{Item, Size};

/// Satisfied when the item's size equals the stored size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePredicate {
    size: Size,
}

impl SizePredicate {
    /// Create a predicate matching items of the given size.
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Predicate for SizePredicate {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        item.size() == self.size
    }
}
