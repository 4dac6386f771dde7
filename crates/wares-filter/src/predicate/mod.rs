//! Composable predicates over catalog items.
//!
//! A predicate is a pure boolean test over an [`Item`]. The capability set is
//! open: adding a variant means adding a type that implements [`Predicate`],
//! with no change to existing variants or to the filter operation. Logical
//! combinators (AND, OR, NOT) are themselves predicates, so composition nests
//! without limit.
//!
//! # Module Structure
//!
//! - `color` - Equality on the item's color attribute
//! - `size` - Equality on the item's size attribute
//! - `name` - String matching over the item's display name
//! - `logical` - Logical combinators (AND, OR, NOT)
//! - `spec` - Declarative predicate documents and their compilation

mod color;
mod logical;
mod name;
mod size;
mod spec;

pub use color::ColorPredicate;
pub use logical::{AndPredicate, NotPredicate, OrPredicate};
pub use name::{NamePredicate, StringMatch};
pub use size::SizePredicate;
pub use spec::PredicateSpec;

use crate::item::Item;

/// A pure boolean test over an [`Item`].
///
/// Implementations must be total and side-effect free: evaluation never
/// mutates the item or the predicate, and the same inputs always produce the
/// same answer.
pub trait Predicate: std::fmt::Debug {
    /// Check whether `item` satisfies this predicate.
    fn is_satisfied_by(&self, item: &Item) -> bool;

    /// Combine with another predicate; satisfied only when both are.
    fn and<P>(self, other: P) -> AndPredicate<Self, P>
    where
        Self: Sized,
        P: Predicate,
    {
        AndPredicate::new(self, other)
    }

    /// Combine with another predicate; satisfied when either is.
    fn or<P>(self, other: P) -> OrPredicate<Self, P>
    where
        Self: Sized,
        P: Predicate,
    {
        OrPredicate::new(self, other)
    }

    /// Invert this predicate.
    fn negate(self) -> NotPredicate<Self>
    where
        Self: Sized,
    {
        NotPredicate::new(self)
    }
}

impl<P: Predicate + ?Sized> Predicate for Box<P> {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        (**self).is_satisfied_by(item)
    }
}

impl<P: Predicate + ?Sized> Predicate for &P {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        (**self).is_satisfied_by(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Color, Size};

    #[test]
    fn test_boxed_predicate_delegates() {
        let boxed: Box<dyn Predicate> = Box::new(ColorPredicate::new(Color::Blue));
        let potter = Item::new("Potter", Size::Medium, Color::Blue);

        assert!(boxed.is_satisfied_by(&potter));
    }

    #[test]
    fn test_borrowed_predicates_compose() {
        let blue = ColorPredicate::new(Color::Blue);
        let medium = SizePredicate::new(Size::Medium);

        // Composing through references leaves the originals usable.
        let both = (&blue).and(&medium);
        let potter = Item::new("Potter", Size::Medium, Color::Blue);

        assert!(both.is_satisfied_by(&potter));
        assert!(blue.is_satisfied_by(&potter));
        assert!(medium.is_satisfied_by(&potter));
    }
}
