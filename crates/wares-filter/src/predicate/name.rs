//! String-matching predicate over the item's display name.

use super::Predicate;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// String matching operator for item names.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StringMatch {
    /// Exact string equality
    Equals(String),

    /// Name contains substring
    Contains(String),

    /// Name starts with prefix
    StartsWith(String),

    /// Name ends with suffix
    EndsWith(String),
}

/// Satisfied when the item's name matches the stored operator.
///
/// Matching is case-sensitive; names are free-form strings, not categorical
/// values, so there is no normalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePredicate {
    matcher: StringMatch,
}

impl NamePredicate {
    /// Create a predicate matching items by name.
    pub fn new(matcher: StringMatch) -> Self {
        Self { matcher }
    }
}

impl Predicate for NamePredicate {
    fn is_satisfied_by(&self, item: &Item) -> bool {
        let name = item.name();
        match &self.matcher {
            StringMatch::Equals(value) => name == value,
            StringMatch::Contains(value) => name.contains(value.as_str()),
            StringMatch::StartsWith(value) => name.starts_with(value.as_str()),
            StringMatch::EndsWith(value) => name.ends_with(value.as_str()),
        }
    }
}
