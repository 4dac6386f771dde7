//! Logical combinators for composing predicates.
//!
//! Each combinator is itself a predicate, so composition nests without limit
//! (AND of AND, NOT of OR, and so on) and the filter operation never changes.

use super::Predicate;
use crate::item::Item;

/// Satisfied only when both operands are satisfied.
///
/// Operands are evaluated left to right; evaluation short-circuits on the
/// first unsatisfied operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndPredicate<L, R> {
    left: L,
    right: R,
}

impl<L, R> AndPredicate<L, R> {
    /// Combine two predicates conjunctively.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Predicate, R: Predicate> Predicate for AndPredicate<L, R> {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        self.left.is_satisfied_by(item) && self.right.is_satisfied_by(item)
    }
}

/// Satisfied when either operand is satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrPredicate<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrPredicate<L, R> {
    /// Combine two predicates disjunctively.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Predicate, R: Predicate> Predicate for OrPredicate<L, R> {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        self.left.is_satisfied_by(item) || self.right.is_satisfied_by(item)
    }
}

/// Satisfied when the inner predicate is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotPredicate<P> {
    inner: P,
}

impl<P> NotPredicate<P> {
    /// Invert a predicate.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: Predicate> Predicate for NotPredicate<P> {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        !self.inner.is_satisfied_by(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Color, Size};
    use crate::predicate::{ColorPredicate, SizePredicate};

    fn potter() -> Item {
        Item::new("Potter", Size::Medium, Color::Blue)
    }

    #[test]
    fn test_and() {
        let blue = ColorPredicate::new(Color::Blue);
        let medium = SizePredicate::new(Size::Medium);
        let yuge = SizePredicate::new(Size::Yuge);

        assert!(AndPredicate::new(blue, medium).is_satisfied_by(&potter()));
        assert!(!AndPredicate::new(blue, yuge).is_satisfied_by(&potter()));
    }

    #[test]
    fn test_or() {
        let red = ColorPredicate::new(Color::Red);
        let medium = SizePredicate::new(Size::Medium);
        let yuge = SizePredicate::new(Size::Yuge);

        assert!(OrPredicate::new(red, medium).is_satisfied_by(&potter()));
        assert!(!OrPredicate::new(red, yuge).is_satisfied_by(&potter()));
    }

    #[test]
    fn test_not() {
        let red = ColorPredicate::new(Color::Red);
        let blue = ColorPredicate::new(Color::Blue);

        assert!(NotPredicate::new(red).is_satisfied_by(&potter()));
        assert!(!NotPredicate::new(blue).is_satisfied_by(&potter()));
    }

    #[test]
    fn test_nested_composition() {
        // NOT (red OR green) == blue, for the closed color set
        let red_or_green =
            OrPredicate::new(ColorPredicate::new(Color::Red), ColorPredicate::new(Color::Green));
        let not_warm = NotPredicate::new(red_or_green);

        assert!(not_warm.is_satisfied_by(&potter()));
        assert!(!not_warm.is_satisfied_by(&Item::new("Truck", Size::Large, Color::Red)));
    }

    #[test]
    fn test_fluent_composition() {
        let predicate = ColorPredicate::new(Color::Blue)
            .and(SizePredicate::new(Size::Medium))
            .or(ColorPredicate::new(Color::Red));

        assert!(predicate.is_satisfied_by(&potter()));
        assert!(predicate.is_satisfied_by(&Item::new("Truck", Size::Large, Color::Red)));
        assert!(!predicate.is_satisfied_by(&Item::new("Apple", Size::Small, Color::Green)));
    }
}
