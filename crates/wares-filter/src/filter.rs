//! The filter operation: lazy, order-preserving selection.

use crate::item::Item;
use crate::predicate::Predicate;

/// Select the items satisfying `predicate`, preserving input order.
///
/// The returned iterator is lazy and single-pass: each item is tested as the
/// consumer advances, and nothing is materialized up front. Re-consuming
/// requires a fresh call over the same inputs. The operation itself holds no
/// state, so two independent calls never interfere.
pub fn filter<'a, I, P>(items: I, predicate: &'a P) -> Filtered<'a, I::IntoIter, P>
where
    I: IntoIterator<Item = &'a Item>,
    P: Predicate + ?Sized,
{
    Filtered {
        items: items.into_iter(),
        predicate,
    }
}

/// Lazy iterator over the items satisfying a predicate.
///
/// Produced by [`filter`].
#[derive(Debug, Clone)]
pub struct Filtered<'a, I, P: ?Sized> {
    items: I,
    predicate: &'a P,
}

impl<'a, I, P> Iterator for Filtered<'a, I, P>
where
    I: Iterator<Item = &'a Item>,
    P: Predicate + ?Sized,
{
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.items
            .by_ref()
            .find(|item| self.predicate.is_satisfied_by(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere from none to all of the remaining items may match.
        let (_, upper) = self.items.size_hint();
        (0, upper)
    }
}
