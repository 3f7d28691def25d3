//! Configuration errors.
//!
//! Composition and evaluation never fail. The only fallible surface in this
//! crate is loading an [`Environment`](crate::Environment) from a
//! configuration document.

use thiserror::Error;

/// Error returned when an attribute configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document was malformed or did not describe a flat attribute map.
    #[error("invalid JSON attribute configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The YAML document was malformed or did not describe a flat attribute map.
    #[error("invalid YAML attribute configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
