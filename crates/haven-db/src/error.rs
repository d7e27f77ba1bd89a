//! Database error types for haven-db.

use haven_audit::AuditStoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// No audit entry with the requested id.
    #[error("Audit entry {id} not found")]
    NotFound { id: i64 },

    /// Caller-supplied data was rejected before reaching SQL.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for AuditStoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::InvalidInput(reason) => Self::Rejected(reason),
            other => Self::backend(other),
        }
    }
}
