//! The change auditor.
//!
//! Every recording method follows the same protocol:
//! 1. Compute field changes (pure, see [`crate::diff`])
//! 2. Write one row per change, awaiting each insert in turn
//! 3. Log and skip any failed insert
//! 4. Return an [`AuditOutcome`] tally (never an error)

use serde::Serialize;

use haven_core::ActorId;
use haven_core::Snapshot;
use haven_core::entities::NewAuditEntry;
use haven_core::enums::ChangeKind;

use crate::diff::{FieldChange, creation_changes, deletion_changes, diff};
use crate::store::AuditStore;

/// Tally of one recording call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditOutcome {
    pub attempted: usize,
    pub written: usize,
    pub failed: usize,
}

impl AuditOutcome {
    /// Whether every attempted write landed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Diffs record snapshots and appends one audit row per changed field.
///
/// Stateless apart from the injected store. Concurrent calls are independent
/// and their rows may interleave.
pub struct ChangeAuditor<S> {
    store: S,
    enabled: bool,
}

impl<S: AuditStore> ChangeAuditor<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            enabled: true,
        }
    }

    /// Turn recording on or off. A disabled auditor writes nothing.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Log every non-null, non-bookkeeping field of a new record.
    pub async fn record_creation(
        &self,
        actor_id: Option<&ActorId>,
        entity_kind: &str,
        snapshot: &Snapshot,
    ) -> AuditOutcome {
        self.write_all(actor_id, entity_kind, ChangeKind::Created, creation_changes(snapshot))
            .await
    }

    /// Log every non-null, non-bookkeeping field of a removed record.
    pub async fn record_deletion(
        &self,
        actor_id: Option<&ActorId>,
        entity_kind: &str,
        snapshot: &Snapshot,
    ) -> AuditOutcome {
        self.write_all(actor_id, entity_kind, ChangeKind::Deleted, deletion_changes(snapshot))
            .await
    }

    /// Log each field whose value differs between `before` and `after`.
    ///
    /// `primary_key_field` is excluded along with the timestamp fields; pass
    /// [`DEFAULT_PRIMARY_KEY`](crate::DEFAULT_PRIMARY_KEY) for `"id"`.
    pub async fn record_changes(
        &self,
        actor_id: Option<&ActorId>,
        entity_kind: &str,
        before: &Snapshot,
        after: &Snapshot,
        primary_key_field: &str,
    ) -> AuditOutcome {
        self.write_all(
            actor_id,
            entity_kind,
            ChangeKind::Updated,
            diff(before, after, primary_key_field),
        )
        .await
    }

    async fn write_all(
        &self,
        actor_id: Option<&ActorId>,
        entity_kind: &str,
        kind: ChangeKind,
        changes: Vec<FieldChange>,
    ) -> AuditOutcome {
        let mut outcome = AuditOutcome::default();
        if !self.enabled {
            tracing::debug!(entity_kind, %kind, skipped = changes.len(), "auditing disabled");
            return outcome;
        }
        if changes.is_empty() {
            return outcome;
        }
        if actor_id.is_none() {
            tracing::warn!(entity_kind, %kind, "recording audit entries without an actor");
        }

        for change in changes {
            outcome.attempted += 1;
            let field = change.field_name.clone();
            let entry = NewAuditEntry {
                actor_id: actor_id.cloned(),
                entity_kind: entity_kind.to_string(),
                field_name: Some(change.field_name),
                before_value: change.before_value,
                after_value: change.after_value,
            };

            match self.store.insert(&entry).await {
                Ok(()) => {
                    outcome.written += 1;
                    tracing::debug!(entity_kind, field = %field, %kind, "audit entry written");
                }
                Err(error) => {
                    outcome.failed += 1;
                    tracing::error!(%error, entity_kind, field = %field, %kind, "failed to write audit entry");
                }
            }
        }

        outcome
    }
}
