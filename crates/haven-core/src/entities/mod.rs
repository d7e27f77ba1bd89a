//! Entity structs persisted by the audit subsystem.
//!
//! Audit rows are the only entity this workspace owns. The sanctuary's own
//! records (horses, medical records, ...) reach the auditor as `Snapshot`s.

mod audit;

pub use audit::{AuditEntry, NewAuditEntry};
