//! Error type for the filtering library.

use thiserror::Error;

/// Errors produced when parsing or compiling a declarative predicate spec.
///
/// Unknown categorical tokens are programmer (or document author) errors and
/// are reported immediately; nothing in this library retries or degrades.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A document named a color outside the known set.
    #[error("unknown color '{0}' (expected one of: green, red, blue)")]
    UnknownColor(String),

    /// A document named a size outside the known set.
    #[error("unknown size '{0}' (expected one of: small, medium, large, yuge)")]
    UnknownSize(String),

    /// A document could not be parsed as JSON.
    #[error("invalid JSON predicate spec: {0}")]
    Json(#[from] serde_json::Error),

    /// A document could not be parsed as YAML.
    #[error("invalid YAML predicate spec: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
