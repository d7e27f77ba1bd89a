//! Shared test utilities for haven-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use haven_core::entities::NewAuditEntry;

    use crate::service::AuditLog;

    /// In-memory audit log with migrations applied.
    pub async fn test_log() -> AuditLog {
        AuditLog::open_local(":memory:").await.unwrap()
    }

    /// Build an actor-less entry.
    pub fn new_entry(
        kind: &str,
        field: &str,
        before: Option<&str>,
        after: Option<&str>,
    ) -> NewAuditEntry {
        NewAuditEntry {
            actor_id: None,
            entity_kind: kind.into(),
            field_name: Some(field.into()),
            before_value: before.map(String::from),
            after_value: after.map(String::from),
        }
    }
}
