//! Configuration and reporting types for the importer

use echo_core::{ErrorKind, SongRecord};
use echo_metadata::TagStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for import operations.
///
/// Injected explicitly at construction; nothing here is read from ambient
/// process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// The one required setting: dropped folders must live beneath this
    /// directory (e.g. `~/Music/Music/Media.localized/Apple Music`)
    pub allowed_root: PathBuf,

    /// How song identity is derived from each file
    pub strategy: TagStrategy,
}

impl ImportConfig {
    /// Config with the default folder-structure identity strategy
    pub fn new(allowed_root: impl Into<PathBuf>) -> Self {
        Self {
            allowed_root: allowed_root.into(),
            strategy: TagStrategy::default(),
        }
    }
}

/// Whether a file's identity was already in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStatus {
    /// Inserted into the catalog by this drop
    New,

    /// Identity already catalogued; nothing inserted
    Duplicate,
}

/// One processed file, as the presentation layer renders it per row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// The media file that was processed
    pub path: PathBuf,

    /// The extracted record (for duplicates: the freshly extracted one,
    /// not the stored row)
    pub record: SongRecord,

    /// New or Duplicate
    pub status: ImportStatus,
}

/// The failure that halted a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportFailure {
    /// File being processed when the batch stopped
    pub path: PathBuf,

    /// Category recorded in the error log
    pub kind: ErrorKind,

    /// Human-readable description
    pub message: String,
}

/// Summary of one drop.
///
/// When `first_error` is set the batch halted there: files before it are
/// committed and counted, files after it were never attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Files the loop reached, including the one that failed (if any)
    pub files_attempted: usize,

    /// Files inserted as new records
    pub files_imported: usize,

    /// Files skipped because their identity was already catalogued
    pub files_skipped_duplicate: usize,

    /// Per-file outcomes in processing order
    pub outcomes: Vec<FileOutcome>,

    /// First extraction or catalog failure, if the batch halted
    pub first_error: Option<ImportFailure>,
}

impl ImportSummary {
    /// One-line rendering for status labels
    pub fn summary_text(&self) -> String {
        match &self.first_error {
            Some(failure) => format!(
                "Import halted at file {}: {} new, {} duplicate(s); error: {}",
                self.files_attempted,
                self.files_imported,
                self.files_skipped_duplicate,
                failure.message
            ),
            None => format!(
                "Import complete: {} file(s) processed, {} new, {} duplicate(s)",
                self.files_attempted, self.files_imported, self.files_skipped_duplicate
            ),
        }
    }
}
