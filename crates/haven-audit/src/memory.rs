//! In-process audit store.
//!
//! Keeps rows in a `Vec` behind a mutex. Used to preview what an operation
//! would log without touching the database, and as a test double.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;

use haven_core::entities::{AuditEntry, NewAuditEntry};

use crate::store::{AuditStore, AuditStoreError};

#[derive(Debug, Default)]
pub struct MemoryAuditStore {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAuditStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditStore for MemoryAuditStore {
    async fn insert(&self, entry: &NewAuditEntry) -> Result<(), AuditStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let id = i64::try_from(entries.len() + 1)
            .map_err(|_| AuditStoreError::Rejected("memory store is full".into()))?;
        entries.push(AuditEntry {
            id,
            actor_id: entry.actor_id.clone(),
            entity_kind: entry.entity_kind.clone(),
            field_name: entry.field_name.clone(),
            before_value: entry.before_value.clone(),
            after_value: entry.after_value.clone(),
            event_time: Utc::now(),
        });
        Ok(())
    }
}
