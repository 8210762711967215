//! Error types for streamscope.

use thiserror::Error;

/// The main error type for streamscope operations.
#[derive(Error, Debug)]
pub enum StreamscopeError {
    /// A scene object with the given name is already registered.
    #[error("scene object '{0}' already registered")]
    ObjectExists(String),

    /// The metadata lookup failed at the transport level.
    ///
    /// A channel that simply does not exist is not an error; lookups report
    /// that as `Ok(None)`.
    #[error("metadata transport error: {0}")]
    MetadataTransport(String),

    /// Invalid or missing configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for streamscope operations.
pub type Result<T> = std::result::Result<T, StreamscopeError>;
