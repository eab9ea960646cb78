//! Error types for esquiva operations.

use thiserror::Error;

use crate::config::ValidationError;

/// Result type alias for esquiva operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the library entry points.
///
/// Failures inside a search (simulator crashes, placement dead ends) are
/// absorbed by the search and never reach this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Mission file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Mission file parsed but is not usable.
    #[error("Invalid mission: {0}")]
    Validation(#[from] ValidationError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generation result could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Iteration budget must be positive.
    #[error("Invalid budget: {0} (must be > 0)")]
    InvalidBudget(usize),
}
