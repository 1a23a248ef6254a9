//! Metadata extraction using lofty

use crate::format::{format_duration, format_file_size, parse_release_date, UNKNOWN};
use crate::{MetadataError, Result};
use echo_core::SongRecord;
use lofty::{Accessor, AudioFile, ItemKey, Tag, TaggedFileExt};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// How a song's identity (song / album / artist) is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagStrategy {
    /// From the directory layout: `artist/album/song.ext` (the Apple Music
    /// folder structure). The default.
    #[default]
    FolderStructure,

    /// From the embedded sort-order tag fields
    EmbeddedTags,
}

/// Extract a [`SongRecord`] from one audio file.
///
/// The caller guarantees the path exists and is readable; discovery already
/// found it. Only a file that cannot be parsed as a media container fails.
/// A parsed file with no tag block still extracts, with the identity
/// falling back per strategy and every descriptive attribute taking its
/// documented default.
pub fn extract(path: &Path, strategy: TagStrategy) -> Result<SongRecord> {
    let tagged_file = lofty::read_from_path(path)
        .map_err(|e| MetadataError::Unreadable(format!("{}: {e}", path.display())))?;
    let tag = tagged_file.primary_tag().or_else(|| tagged_file.tags().first());

    let (song, album, artist) = match strategy {
        TagStrategy::FolderStructure => identity_from_path(path),
        TagStrategy::EmbeddedTags => identity_from_tags(tag),
    };

    let duration_ms = u64::try_from(tagged_file.properties().duration().as_millis()).ok();
    let file_size = fs::metadata(path).map(|meta| meta.len()).ok();
    let release_date =
        parse_release_date(tag.and_then(|tag| tag.get_string(&ItemKey::RecordingDate)));

    Ok(SongRecord::new(
        song,
        album,
        artist,
        release_date,
        format_duration(duration_ms),
        format_file_size(file_size),
    ))
}

/// Identity from the directory layout: immediate parent is the album,
/// grandparent is the artist. Fewer than two named ancestors means both
/// default to `"Unknown"`.
fn identity_from_path(path: &Path) -> (String, String, String) {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let song = strip_track_number(stem).to_string();

    let album = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str());
    let artist = path
        .parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|name| name.to_str());

    match (album, artist) {
        (Some(album), Some(artist)) => (song, album.to_string(), artist.to_string()),
        _ => (song, UNKNOWN.to_string(), UNKNOWN.to_string()),
    }
}

/// Identity from the embedded sort-order fields, falling back to the plain
/// title/album/artist fields, then `"Unknown"`.
fn identity_from_tags(tag: Option<&Tag>) -> (String, String, String) {
    let Some(tag) = tag else {
        return (
            UNKNOWN.to_string(),
            UNKNOWN.to_string(),
            UNKNOWN.to_string(),
        );
    };

    let song = tag
        .get_string(&ItemKey::TrackTitleSortOrder)
        .map(str::to_string)
        .or_else(|| tag.title().map(Cow::into_owned))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let album = tag
        .get_string(&ItemKey::AlbumTitleSortOrder)
        .map(str::to_string)
        .or_else(|| tag.album().map(Cow::into_owned))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let artist = tag
        .get_string(&ItemKey::TrackArtistSortOrder)
        .map(str::to_string)
        .or_else(|| tag.artist().map(Cow::into_owned))
        .unwrap_or_else(|| UNKNOWN.to_string());

    (song, album, artist)
}

/// Strip a leading run of digits plus following whitespace, so
/// `"03 Track Name"` becomes `"Track Name"`. Names without a leading
/// track number pass through untouched.
fn strip_track_number(name: &str) -> &str {
    let rest = name.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == name.len() {
        name
    } else {
        rest.trim_start()
    }
}
