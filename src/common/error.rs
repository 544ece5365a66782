//! Unified error types for the Tilework library.
//!
//! Widgets validate their configuration while rendering and surface problems
//! synchronously; there is no retry or recovery layer.
use thiserror::Error;

/// Main error type for Tilework operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid widget configuration supplied by the caller
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Client-binding options could not be serialized to JSON
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for Tilework operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
