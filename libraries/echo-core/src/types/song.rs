/// Song domain types
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Placeholder release date meaning "date unknown".
///
/// Emitted when a file carries no encoded-date tag or the tag fails to
/// parse. The catalog stores this date rather than rejecting the file.
pub const SENTINEL_RELEASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => panic!("invalid sentinel date"),
};

/// One catalogued song.
///
/// Records are immutable once inserted: the catalog supports insert and
/// delete only, never update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Surrogate key assigned by the catalog on insert. `None` until then.
    pub id: Option<i64>,

    /// Track title
    pub song: String,

    /// Album name
    pub album: String,

    /// Artist name
    pub artist: String,

    /// Best-effort release date; [`SENTINEL_RELEASE_DATE`] when unknown
    pub approx_release_date: NaiveDate,

    /// Duration formatted `M:SS`, or `"Unknown"`
    pub duration: String,

    /// File size formatted `"<MB> MB"`, or `"Unknown"`
    pub file_size: String,

    /// Wall-clock time of ingestion (not of the audio file)
    pub created_date: NaiveDateTime,
}

impl SongRecord {
    /// Create a record stamped with the current local time
    pub fn new(
        song: impl Into<String>,
        album: impl Into<String>,
        artist: impl Into<String>,
        approx_release_date: NaiveDate,
        duration: impl Into<String>,
        file_size: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            song: song.into(),
            album: album.into(),
            artist: artist.into(),
            approx_release_date,
            duration: duration.into(),
            file_size: file_size.into(),
            created_date: Local::now().naive_local(),
        }
    }

    /// The (song, album, artist) tuple used for duplicate detection
    pub fn identity(&self) -> IdentityKey {
        IdentityKey {
            song: self.song.clone(),
            album: self.album.clone(),
            artist: self.artist.clone(),
        }
    }
}

/// The (song, album, artist) tuple that identifies a previously seen track.
///
/// This is a functional key: the catalog enforces no uniqueness constraint
/// on it. The importer upholds the no-duplicate invariant by checking
/// existence before every insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityKey {
    /// Track title
    pub song: String,

    /// Album name
    pub album: String,

    /// Artist name
    pub artist: String,
}

impl IdentityKey {
    /// Create an identity key
    pub fn new(
        song: impl Into<String>,
        album: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            song: song.into(),
            album: album.into(),
            artist: artist.into(),
        }
    }
}
