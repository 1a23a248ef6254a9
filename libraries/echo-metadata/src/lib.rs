//! Echo Library Metadata
//!
//! Metadata extraction for Echo Library.
//!
//! Given the path of one audio file, [`extract`] produces a [`SongRecord`]
//! carrying the song's identity (song / album / artist) and its descriptive
//! attributes (approximate release date, duration, file size), or fails
//! with a [`MetadataError`] when the file cannot be parsed as a media
//! container at all.
//!
//! Identity derivation supports two strategies (see [`TagStrategy`]):
//! folder structure (`artist/album/song.ext`, the Apple Music layout) or
//! embedded sort-order tags. Descriptive attributes are always best-effort:
//! a file with no tag block still extracts, with documented fallbacks.
//!
//! # Example
//!
//! ```rust,no_run
//! use echo_metadata::{extract, TagStrategy};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = extract(
//!     Path::new("/Music/Artist X/Album Y/03 Track Name.m4p"),
//!     TagStrategy::FolderStructure,
//! )?;
//! assert_eq!(record.artist, "Artist X");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod format;
mod reader;

pub use error::{MetadataError, Result};
pub use format::{format_duration, format_file_size, parse_release_date};
pub use reader::{extract, TagStrategy};

pub use echo_core::SongRecord;
