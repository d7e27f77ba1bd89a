use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::enums::ChangeKind;

/// An append-only audit row recording one field's before/after change.
///
/// `id` and `event_time` are assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    pub actor_id: Option<ActorId>,
    pub entity_kind: String,
    pub field_name: Option<String>,
    pub before_value: Option<String>,
    pub after_value: Option<String>,
    pub event_time: DateTime<Utc>,
}

impl AuditEntry {
    /// Classify the row by which side of the change carries a value.
    #[must_use]
    pub const fn change_kind(&self) -> ChangeKind {
        ChangeKind::classify(self.before_value.is_some(), self.after_value.is_some())
    }
}

/// Insert payload handed to an audit store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub actor_id: Option<ActorId>,
    pub entity_kind: String,
    pub field_name: Option<String>,
    pub before_value: Option<String>,
    pub after_value: Option<String>,
}

impl NewAuditEntry {
    #[must_use]
    pub const fn change_kind(&self) -> ChangeKind {
        ChangeKind::classify(self.before_value.is_some(), self.after_value.is_some())
    }
}
