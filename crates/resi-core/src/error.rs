//! Error types for the resi-core library.
//!
//! The parsers themselves never fail: a field that cannot be extracted is an
//! absent `Option` or an empty string, not an error. These types cover the
//! plumbing around the engine (configuration files, serialization).

use thiserror::Error;

/// Main error type for the resi library.
#[derive(Error, Debug)]
pub enum ResiError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the resi library.
pub type Result<T> = std::result::Result<T, ResiError>;
