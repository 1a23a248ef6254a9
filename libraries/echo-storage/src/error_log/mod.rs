//! Diagnostic error log queries

use crate::error::{Result, StorageError};
use crate::DATETIME_FORMAT;
use chrono::{Local, NaiveDateTime};
use echo_core::{ErrorKind, ErrorLogEntry};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Record an error and return its log id, stamped with the current time
pub async fn insert(pool: &SqlitePool, kind: ErrorKind, message: &str) -> Result<i64> {
    let created_date = Local::now().naive_local().format(DATETIME_FORMAT).to_string();

    let result = sqlx::query(
        "INSERT INTO error_log (error_type, error_message, created_date) VALUES (?, ?, ?)",
    )
    .bind(kind.as_str())
    .bind(message)
    .bind(created_date)
    .execute(pool)
    .await?;

    let error_id = result.last_insert_rowid();
    tracing::debug!(error_id, kind = kind.as_str(), "recorded error log entry");

    Ok(error_id)
}

/// All log entries, newest first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<ErrorLogEntry>> {
    let rows = sqlx::query(
        "SELECT error_id, error_type, error_message, created_date
         FROM error_log
         ORDER BY error_id DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_entry).collect()
}

/// Only the entries raised inside import batches
pub async fn get_processing(pool: &SqlitePool) -> Result<Vec<ErrorLogEntry>> {
    let rows = sqlx::query(
        "SELECT error_id, error_type, error_message, created_date
         FROM error_log
         WHERE error_type = ?
         ORDER BY error_id DESC",
    )
    .bind(ErrorKind::Processing.as_str())
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_entry).collect()
}

/// Delete one entry by id
pub async fn delete(pool: &SqlitePool, error_id: i64) -> Result<()> {
    sqlx::query("DELETE FROM error_log WHERE error_id = ?")
        .bind(error_id)
        .execute(pool)
        .await?;

    Ok(())
}

fn row_to_entry(row: &SqliteRow) -> Result<ErrorLogEntry> {
    let kind: String = row.get("error_type");
    let created_date: String = row.get("created_date");

    Ok(ErrorLogEntry {
        id: row.get("error_id"),
        kind: kind
            .parse::<ErrorKind>()
            .map_err(StorageError::CorruptRow)?,
        message: row.get("error_message"),
        created_date: NaiveDateTime::parse_from_str(&created_date, DATETIME_FORMAT)
            .map_err(|e| StorageError::CorruptRow(format!("created_date: {e}")))?,
    })
}
