//! # haven-db
//!
//! libSQL persistence for the sanctuary audit log.
//!
//! Owns a single table, `audit_logs`, which is append-only: triggers abort
//! any `UPDATE` or `DELETE`. [`service::AuditLog`] is the entry point. It
//! implements [`haven_audit::AuditStore`] for the auditor's writes and offers
//! the read side (list newest first, fetch by id, count) plus manual appends.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod store;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Raw database handle for audit storage.
///
/// Wraps a libSQL database and one connection. Migrations run on open.
pub struct HavenDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HavenDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let haven_db = Self { db, conn };
        haven_db.run_migrations().await?;
        tracing::debug!(path, "audit database opened");
        Ok(haven_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
