//! Persistence seam for audit rows.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use haven_core::entities::NewAuditEntry;

/// Errors a store may report for a single insert.
#[derive(Debug, Error)]
pub enum AuditStoreError {
    /// The store refused the row (constraint, validation).
    #[error("Audit entry rejected: {0}")]
    Rejected(String),

    /// The backend failed (connectivity, I/O, serialization).
    #[error("Audit store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl AuditStoreError {
    pub fn backend(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Backend(error.into())
    }
}

/// Append-only sink for audit rows.
///
/// Implementations assign `id` and `event_time` themselves. An insert is
/// independent of every other insert: the auditor never batches.
pub trait AuditStore: Send + Sync {
    /// Append one row.
    fn insert(
        &self,
        entry: &NewAuditEntry,
    ) -> impl Future<Output = Result<(), AuditStoreError>> + Send;
}

impl<S: AuditStore> AuditStore for Arc<S> {
    fn insert(
        &self,
        entry: &NewAuditEntry,
    ) -> impl Future<Output = Result<(), AuditStoreError>> + Send {
        (**self).insert(entry)
    }
}

impl<S: AuditStore> AuditStore for &S {
    fn insert(
        &self,
        entry: &NewAuditEntry,
    ) -> impl Future<Output = Result<(), AuditStoreError>> + Send {
        (**self).insert(entry)
    }
}
