//! Echo Library Importer
//!
//! Batch ingestion of dropped folders into the browsed-music catalog.
//!
//! One user drop becomes one [`SongImporter::import_folder`] call: the
//! folder is checked against the allowed root, every supported media file
//! under it is discovered in directory-walk order, and each file is
//! extracted, checked for a previously seen identity, and persisted if new.
//!
//! Batches are **fail-fast**: the first extraction or catalog failure halts
//! the remaining files, so the already-imported / not-yet-imported boundary
//! stays unambiguous and the user has a clear resume point. Files processed
//! before the failure stay committed.
//!
//! # Architecture
//!
//! - `scanner`: filesystem discovery of supported media files
//! - `importer`: orchestration of the per-drop import loop
//! - `types`: configuration and per-drop reporting types

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod types;

pub mod importer;
pub mod scanner;

pub use error::ImportError;
pub use importer::{is_valid_folder, SongImporter};
pub use scanner::FolderScanner;
pub use types::{FileOutcome, ImportConfig, ImportFailure, ImportStatus, ImportSummary};

/// Re-exported so callers configure the identity strategy without a direct
/// echo-metadata dependency
pub use echo_metadata::TagStrategy;

/// Result type alias using `ImportError`
pub type Result<T> = std::result::Result<T, ImportError>;
