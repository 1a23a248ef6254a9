//! Catalog queries for the `songs` table

use crate::error::{Result, StorageError};
use crate::{DATETIME_FORMAT, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use echo_core::{IdentityKey, SongRecord};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Insert a record and return its surrogate id.
///
/// No duplicate check happens here: callers that care (the importer) must
/// check [`exists`] first and treat check-then-insert as one logical unit.
pub async fn insert(pool: &SqlitePool, record: &SongRecord) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO songs (song, album, artist, approx_release_date, duration, file_size, created_date)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.song)
    .bind(&record.album)
    .bind(&record.artist)
    .bind(record.approx_release_date.format(DATE_FORMAT).to_string())
    .bind(&record.duration)
    .bind(&record.file_size)
    .bind(record.created_date.format(DATETIME_FORMAT).to_string())
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Whether a record with this identity key is already catalogued
pub async fn exists(pool: &SqlitePool, identity: &IdentityKey) -> Result<bool> {
    let row = sqlx::query("SELECT 1 FROM songs WHERE song = ? AND album = ? AND artist = ?")
        .bind(&identity.song)
        .bind(&identity.album)
        .bind(&identity.artist)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// All catalogued songs, most recently ingested first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<SongRecord>> {
    let rows = sqlx::query(
        "SELECT id, song, album, artist, approx_release_date, duration, file_size, created_date
         FROM songs
         ORDER BY created_date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_record).collect()
}

/// Songs whose title contains the given substring (case-insensitive)
pub async fn search(pool: &SqlitePool, song_substring: &str) -> Result<Vec<SongRecord>> {
    let pattern = format!("%{song_substring}%");

    let rows = sqlx::query(
        "SELECT id, song, album, artist, approx_release_date, duration, file_size, created_date
         FROM songs
         WHERE song LIKE ?
         ORDER BY created_date DESC, id DESC",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_record).collect()
}

/// Delete every record matching the identity key; returns rows removed
pub async fn delete(pool: &SqlitePool, identity: &IdentityKey) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE song = ? AND album = ? AND artist = ?")
        .bind(&identity.song)
        .bind(&identity.album)
        .bind(&identity.artist)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

fn row_to_record(row: &SqliteRow) -> Result<SongRecord> {
    let release_date: String = row.get("approx_release_date");
    let created_date: String = row.get("created_date");

    Ok(SongRecord {
        id: Some(row.get::<i64, _>("id")),
        song: row.get("song"),
        album: row.get("album"),
        artist: row.get("artist"),
        approx_release_date: NaiveDate::parse_from_str(&release_date, DATE_FORMAT)
            .map_err(|e| StorageError::CorruptRow(format!("approx_release_date: {e}")))?,
        duration: row.get("duration"),
        file_size: row.get("file_size"),
        created_date: NaiveDateTime::parse_from_str(&created_date, DATETIME_FORMAT)
            .map_err(|e| StorageError::CorruptRow(format!("created_date: {e}")))?,
    })
}
