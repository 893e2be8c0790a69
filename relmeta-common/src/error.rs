//! Common error types for relmeta

use thiserror::Error;

/// Common result type for relmeta operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across relmeta crates
///
/// Scoring, aggregation and ranking never fail; only decoding and
/// configuration loading produce these.
#[derive(Error, Debug)]
pub enum Error {
    /// Record (de)serialization error (wraps serde_json::Error)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input value (unknown identifier kind, bad weight, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
