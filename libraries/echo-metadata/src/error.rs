/// Metadata-specific errors
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File could not be parsed as a media container
    #[error("Unreadable media container: {0}")]
    Unreadable(String),
}

impl From<MetadataError> for echo_core::EchoError {
    fn from(err: MetadataError) -> Self {
        echo_core::EchoError::metadata(err.to_string())
    }
}
