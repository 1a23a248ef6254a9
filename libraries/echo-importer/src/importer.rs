//! Import orchestration: one drop, one batch, fail-fast

use crate::scanner::FolderScanner;
use crate::types::{FileOutcome, ImportConfig, ImportFailure, ImportStatus, ImportSummary};
use crate::{ImportError, Result};
use echo_core::ErrorKind;
use echo_storage::{error_log, songs};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

/// Importer for dropped folders.
///
/// Holds the catalog pool and the injected configuration. Not re-entrant by
/// contract: the caller serializes drop events, one batch at a time.
pub struct SongImporter {
    pool: SqlitePool,
    config: ImportConfig,
}

impl SongImporter {
    /// Create a new importer
    pub fn new(pool: SqlitePool, config: ImportConfig) -> Self {
        Self { pool, config }
    }

    /// Import every supported media file under a dropped folder.
    ///
    /// A folder outside the allowed root fails immediately with
    /// [`ImportError::InvalidFolder`]: an error-log entry is recorded and
    /// no file is discovered or touched. Otherwise discovery runs and the
    /// batch proceeds per [`import_files`](Self::import_files).
    pub async fn import_folder(&self, root: &Path) -> Result<ImportSummary> {
        if !is_valid_folder(root, &self.config.allowed_root) {
            let message = format!(
                "dropped folder {} is outside the allowed root {}",
                root.display(),
                self.config.allowed_root.display()
            );
            tracing::warn!("{message}");
            // A failed log write must not mask the invalid-folder failure
            if let Err(log_err) =
                error_log::insert(&self.pool, ErrorKind::InvalidFolder, &message).await
            {
                tracing::warn!("could not record error log entry: {log_err}");
            }
            return Err(ImportError::InvalidFolder(message));
        }

        let files = FolderScanner::new().scan_directory(root)?;
        self.import_files(&files).await
    }

    /// Import an explicit list of files, in the given order.
    ///
    /// Sequential and fail-fast: each file is extracted, checked against
    /// the catalog, and inserted if new, to completion, before the next
    /// file starts. The first extraction or catalog failure records an
    /// error-log entry, fills `first_error`, and leaves the remaining
    /// files untouched. Everything imported before the failure stays
    /// committed.
    pub async fn import_files(&self, files: &[PathBuf]) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for path in files {
            summary.files_attempted += 1;

            let record = match echo_metadata::extract(path, self.config.strategy) {
                Ok(record) => record,
                Err(e) => {
                    summary.first_error = Some(
                        self.record_failure(path, ErrorKind::Processing, &e.to_string())
                            .await,
                    );
                    break;
                }
            };

            let is_duplicate = match songs::exists(&self.pool, &record.identity()).await {
                Ok(found) => found,
                Err(e) => {
                    summary.first_error = Some(
                        self.record_failure(path, ErrorKind::Database, &e.to_string())
                            .await,
                    );
                    break;
                }
            };

            if is_duplicate {
                tracing::debug!("skipping duplicate: {}", path.display());
                summary.files_skipped_duplicate += 1;
                summary.outcomes.push(FileOutcome {
                    path: path.clone(),
                    record,
                    status: ImportStatus::Duplicate,
                });
                continue;
            }

            match songs::insert(&self.pool, &record).await {
                Ok(id) => {
                    tracing::debug!("imported {} as song {id}", path.display());
                    summary.files_imported += 1;
                    summary.outcomes.push(FileOutcome {
                        path: path.clone(),
                        record,
                        status: ImportStatus::New,
                    });
                }
                Err(e) => {
                    summary.first_error = Some(
                        self.record_failure(path, ErrorKind::Database, &e.to_string())
                            .await,
                    );
                    break;
                }
            }
        }

        Ok(summary)
    }

    /// Log the failure that halts the batch. A failed log write must not
    /// mask the original failure, so it only warns.
    async fn record_failure(&self, path: &Path, kind: ErrorKind, detail: &str) -> ImportFailure {
        let message = format!("{}: {detail}", path.display());
        tracing::error!(kind = kind.as_str(), "import halted: {message}");

        if let Err(log_err) = error_log::insert(&self.pool, kind, &message).await {
            tracing::warn!("could not record error log entry: {log_err}");
        }

        ImportFailure {
            path: path.to_path_buf(),
            kind,
            message,
        }
    }
}

/// Whether a dropped path lies beneath the allowed root.
///
/// A lexical, component-wise prefix check on the paths as given; nothing
/// semantic and no filesystem access.
pub fn is_valid_folder(path: &Path, allowed_root: &Path) -> bool {
    path.starts_with(allowed_root)
}
