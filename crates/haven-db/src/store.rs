//! `AuditStore` implementation so `ChangeAuditor` can write straight into libSQL.

use haven_audit::{AuditStore, AuditStoreError};
use haven_core::entities::NewAuditEntry;

use crate::service::AuditLog;

impl AuditStore for AuditLog {
    async fn insert(&self, entry: &NewAuditEntry) -> Result<(), AuditStoreError> {
        let stored = self.append(entry).await?;
        tracing::trace!(id = stored.id, entity_kind = %stored.entity_kind, "audit row stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{new_entry, test_log};

    #[tokio::test]
    async fn insert_persists_row() {
        let log = test_log().await;
        log.insert(&new_entry("horses", "name", None, Some("Comet")))
            .await
            .unwrap();
        assert_eq!(log.count(&crate::repos::audit::AuditFilter::default()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_kind_maps_to_rejected() {
        let log = test_log().await;
        let err = log
            .insert(&new_entry(" ", "name", None, Some("Comet")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuditStoreError::Rejected(_)));
    }
}
