/// Error log domain types
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of error categories recorded in the error log.
///
/// Entries from presentation-layer collaborators (export, styling, event,
/// display) land in the same log as ingestion failures, so the full set
/// lives here even though the core only raises the first three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Dropped folder outside the allowed root
    InvalidFolder,

    /// Failure inside a running import batch
    Processing,

    /// Catalog/database failure
    Database,

    /// Spreadsheet export failure (presentation layer)
    Export,

    /// Widget styling failure (presentation layer)
    Styling,

    /// UI event handler failure (presentation layer)
    Event,

    /// Rendering failure (presentation layer)
    Display,

    /// Anything that fits no other category
    Unknown,
}

impl ErrorKind {
    /// Human-readable label, as stored in the `error_type` column
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFolder => "Invalid Folder",
            Self::Processing => "Processing Error",
            Self::Database => "Database Error",
            Self::Export => "Export Error",
            Self::Styling => "Styling Error",
            Self::Event => "Event Error",
            Self::Display => "Display Error",
            Self::Unknown => "Unknown Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Invalid Folder" => Ok(Self::InvalidFolder),
            "Processing Error" => Ok(Self::Processing),
            "Database Error" => Ok(Self::Database),
            "Export Error" => Ok(Self::Export),
            "Styling Error" => Ok(Self::Styling),
            "Event Error" => Ok(Self::Event),
            "Display Error" => Ok(Self::Display),
            "Unknown Error" => Ok(Self::Unknown),
            other => Err(format!("unknown error kind: {other}")),
        }
    }
}

/// One immutable, timestamped entry in the error log.
///
/// The log is purely diagnostic: append-only, deletable per entry, and
/// never alters ingestion outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    /// Surrogate key assigned by the log on insert
    pub id: i64,

    /// Error category
    pub kind: ErrorKind,

    /// Free-text description
    pub message: String,

    /// When the entry was recorded
    pub created_date: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_round_trip() {
        let kinds = [
            ErrorKind::InvalidFolder,
            ErrorKind::Processing,
            ErrorKind::Database,
            ErrorKind::Export,
            ErrorKind::Styling,
            ErrorKind::Event,
            ErrorKind::Display,
            ErrorKind::Unknown,
        ];

        for kind in kinds {
            assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("Timeout Error".parse::<ErrorKind>().is_err());
    }
}
