//! Row-to-entity parsing helpers.
//!
//! Converts `libsql::Row` columns into typed values. Handles both timestamp
//! formats that can appear in `audit_logs.event_time`: the column default
//! (`strftime('%Y-%m-%dT%H:%M:%fZ')`) and `SQLite`'s plain `datetime('now')`.

use chrono::{DateTime, Utc};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles RFC 3339 (`"2026-02-09T14:30:00.123Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// Unlike most nullable columns, an empty string is kept: `""` is a real
/// audited value and differs from "no value".
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_text(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}
