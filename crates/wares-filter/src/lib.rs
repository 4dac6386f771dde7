//! Composable, specification-based filtering over catalog items.
//!
//! This library provides a small predicate system for classifying catalog
//! items by their categorical attributes, with logical combinators (AND, OR,
//! NOT) and a declarative document form that compiles to runtime predicates.
//!
//! # Design Goals
//!
//! 1. **Open capability set**: new predicate variants plug in without
//!    touching existing variants or the filter operation.
//! 2. **Purity**: evaluating a predicate never mutates the item or the
//!    predicate; filtering is a stateless pass over the input.
//! 3. **Laziness**: [`filter`] yields matches on demand, preserving input
//!    order, without materializing intermediate collections.
//!
//! # Module Structure
//!
//! - `item` - The item record and its categorical attributes
//! - `predicate` - The predicate capability, concrete variants, combinators,
//!   and the declarative spec form
//! - `filter` - The lazy filter operation
//! - `error` - Error type for spec compilation
//!
//! # Example
//!
//! ```
//! use wares_filter::{filter, Color, ColorPredicate, Item, Predicate, Size, SizePredicate};
//!
//! let catalog = vec![
//!     Item::new("Apple", Size::Small, Color::Green),
//!     Item::new("Potter", Size::Medium, Color::Blue),
//! ];
//!
//! let blue_and_medium = ColorPredicate::new(Color::Blue).and(SizePredicate::new(Size::Medium));
//! let names: Vec<&str> = filter(&catalog, &blue_and_medium)
//!     .map(|item| item.name())
//!     .collect();
//! assert_eq!(names, ["Potter"]);
//! ```

mod error;
mod filter;
mod item;
mod predicate;

pub use error::FilterError;
pub use filter::{filter, Filtered};
pub use item::{Color, Item, Size};
pub use predicate::{
    AndPredicate, ColorPredicate, NamePredicate, NotPredicate, OrPredicate, Predicate,
    PredicateSpec, SizePredicate, StringMatch,
};
