//! Error types for the importer

use thiserror::Error;

/// Import error types
#[derive(Debug, Error)]
pub enum ImportError {
    /// Dropped folder outside the configured allowed root
    #[error("Invalid folder: {0}")]
    InvalidFolder(String),

    /// Discovery root missing
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Discovery root is not a directory
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Extraction failure
    #[error("Metadata error: {0}")]
    Metadata(#[from] echo_metadata::MetadataError),

    /// Catalog failure
    #[error("Storage error: {0}")]
    Storage(#[from] echo_storage::StorageError),
}
