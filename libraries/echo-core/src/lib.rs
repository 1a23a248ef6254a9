//! Echo Library Core
//!
//! Domain types and error handling shared across the Echo Library crates.
//!
//! Echo Library keeps a persistent catalog of every song a user has already
//! browsed, so that re-dropping a folder flags previously seen tracks as
//! duplicates instead of inserting them again.
//!
//! The core crate defines:
//! - **Domain Types**: [`SongRecord`], [`IdentityKey`], [`ErrorLogEntry`]
//! - **Error Taxonomy**: [`ErrorKind`], the closed set recorded in the
//!   error log
//! - **Error Handling**: Unified [`EchoError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use echo_core::{IdentityKey, SongRecord};
//! use echo_core::types::SENTINEL_RELEASE_DATE;
//!
//! let record = SongRecord::new(
//!     "Track Name",
//!     "Album Y",
//!     "Artist X",
//!     SENTINEL_RELEASE_DATE,
//!     "2:05",
//!     "2.0 MB",
//! );
//!
//! assert_eq!(record.identity(), IdentityKey::new("Track Name", "Album Y", "Artist X"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{EchoError, Result};
pub use types::{ErrorKind, ErrorLogEntry, IdentityKey, SongRecord};
