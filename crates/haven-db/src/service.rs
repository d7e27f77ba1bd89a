//! Service layer over the audit database.
//!
//! `AuditLog` wraps `HavenDb`. Repository methods live in `impl AuditLog`
//! blocks under `repos/`, and the `AuditStore` implementation in `store.rs`.

use crate::HavenDb;
use crate::error::DatabaseError;

/// Append-only audit log backed by libSQL.
///
/// Construct once at startup and inject wherever audit rows are written or
/// read; share behind `Arc` if several owners need it.
pub struct AuditLog {
    db: HavenDb,
}

impl AuditLog {
    /// Open (or create) the audit log at `db_path`. Use `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn open_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = HavenDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HavenDb {
        &self.db
    }
}
