//! Echo Library Storage
//!
//! `SQLite` persistence for the browsed-music catalog.
//!
//! Two tables: `songs` (the catalog of every track the user has browsed)
//! and `error_log` (diagnostic entries). Each feature owns its queries in a
//! vertical slice: [`songs`] and [`error_log`] are modules of free async
//! functions over a [`SqlitePool`].
//!
//! Every operation opens, runs, and finishes against the pool on its own;
//! no transaction spans a whole import batch. The importer relies on this:
//! its existence-check-then-insert per file is the single logical unit that
//! keeps the catalog duplicate-free.
//!
//! # Example
//!
//! ```rust,no_run
//! use echo_storage::{create_pool, run_migrations, songs};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://music_metadata.db").await?;
//! run_migrations(&pool).await?;
//!
//! let all = songs::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;

pub mod error_log;
pub mod songs;

pub use error::{Result, StorageError};

// Canonical column formats for DATE / DATETIME text columns
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations.
///
/// Call once at application startup to bring the schema up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool.
///
/// The database file is created if missing; WAL mode keeps concurrent
/// readers from blocking the single writer.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(pool)
}
