//! Declarative predicate documents and their compilation.
//!
//! A [`PredicateSpec`] is the human-writable form of a predicate, loadable
//! from JSON or YAML. Categorical attributes are carried as raw strings so
//! documents stay readable; [`PredicateSpec::compile`] parses them and fails
//! fast on tokens outside the known sets.

use super::logical::{AndPredicate, NotPredicate, OrPredicate};
use super::{ColorPredicate, NamePredicate, Predicate, SizePredicate, StringMatch};
use crate::error::FilterError;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// Declarative form of a predicate.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PredicateSpec {
    /// Equality on the item's color, named by its lowercase label
    Color(String),

    /// Equality on the item's size, named by its lowercase label
    Size(String),

    /// String match over the item's display name
    Name(StringMatch),

    /// Negates the inner spec
    Not(Box<PredicateSpec>),

    /// Satisfied if ANY of the inner specs is satisfied
    Or(Vec<PredicateSpec>),

    /// Satisfied if ALL of the inner specs are satisfied
    And(Vec<PredicateSpec>),
}

impl PredicateSpec {
    /// Parse a spec from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a spec from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, FilterError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Compile this spec into a runtime predicate.
    ///
    /// An empty `and` matches everything and an empty `or` matches nothing
    /// (vacuous truth). Unknown categorical tokens are reported with the
    /// offending value.
    pub fn compile(&self) -> Result<Box<dyn Predicate>, FilterError> {
        match self {
            PredicateSpec::Color(label) => Ok(Box::new(ColorPredicate::new(label.parse()?))),
            PredicateSpec::Size(label) => Ok(Box::new(SizePredicate::new(label.parse()?))),
            PredicateSpec::Name(matcher) => Ok(Box::new(NamePredicate::new(matcher.clone()))),
            PredicateSpec::Not(inner) => Ok(Box::new(NotPredicate::new(inner.compile()?))),
            PredicateSpec::Or(specs) => {
                let compiled: Result<Vec<_>, _> = specs.iter().map(Self::compile).collect();
                Ok(compiled?
                    .into_iter()
                    .reduce(|left, right| {
                        Box::new(OrPredicate::new(left, right)) as Box<dyn Predicate>
                    })
                    .unwrap_or_else(|| Box::new(MatchNone)))
            }
            PredicateSpec::And(specs) => {
                let compiled: Result<Vec<_>, _> = specs.iter().map(Self::compile).collect();
                Ok(compiled?
                    .into_iter()
                    .reduce(|left, right| {
                        Box::new(AndPredicate::new(left, right)) as Box<dyn Predicate>
                    })
                    .unwrap_or_else(|| Box::new(MatchAll)))
            }
        }
    }
}

/// Vacuous truth for an empty `and`.
#[derive(Debug)]
struct MatchAll;

impl Predicate for MatchAll {
    fn is_satisfied_by(&self, _item: &Item) -> bool {
        true
    }
}

/// Vacuous falsity for an empty `or`.
#[derive(Debug)]
struct MatchNone;

impl Predicate for MatchNone {
    fn is_satisfied_by(&self, _item: &Item) -> bool {
        false
    }
}
