//! Error types for the vocabulary library.

use thiserror::Error;

/// Main error type for vocabulary operations.
#[derive(Error, Debug)]
pub enum DictError {
    /// I/O error while reading or writing a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed serialized vocabulary
    #[error("Invalid vocabulary format: {0}")]
    Format(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Pruning was requested with ids this vocabulary cannot honor
    #[error("Invalid prune request: {0}")]
    Prune(String),
}

/// Result type alias for vocabulary operations.
pub type Result<T> = std::result::Result<T, DictError>;
