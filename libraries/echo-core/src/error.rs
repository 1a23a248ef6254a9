/// Core error types for Echo Library
use thiserror::Error;

/// Result type alias using `EchoError`
pub type Result<T> = std::result::Result<T, EchoError>;

/// Core error type for Echo Library
#[derive(Error, Debug)]
pub enum EchoError {
    /// Metadata extraction errors
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Dropped folder outside the allowed root
    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    /// Failure inside a running import batch
    #[error("Processing error: {0}")]
    Processing(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Unknown(String),
}

impl EchoError {
    /// Create a metadata error
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create an invalid folder error
    pub fn invalid_folder(msg: impl Into<String>) -> Self {
        Self::InvalidFolder(msg.into())
    }

    /// Create a processing error
    pub fn processing(msg: impl Into<String>) -> Self {
        Self::Processing(msg.into())
    }
}
