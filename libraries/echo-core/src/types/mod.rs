//! Domain types for the Echo Library catalog

mod error_log;
mod song;

pub use error_log::{ErrorKind, ErrorLogEntry};
pub use song::{IdentityKey, SongRecord, SENTINEL_RELEASE_DATE};
