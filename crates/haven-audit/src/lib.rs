//! # haven-audit
//!
//! Turns create/update/delete operations on arbitrary sanctuary records into
//! immutable, field-level audit rows.
//!
//! The crate is split into:
//! - [`diff`]: the pure, schema-agnostic diff over two [`Snapshot`]s
//! - [`store`]: the [`AuditStore`] seam a persistence layer implements
//! - [`auditor`]: [`ChangeAuditor`], which diffs and fans out one write per
//!   changed field
//! - [`memory`]: an in-process store for previews and tests
//!
//! Auditing is fail-open. A failed write is logged through `tracing` and the
//! remaining fields are still attempted. Nothing here returns an error to the
//! CRUD handler that triggered the audit.
//!
//! ```
//! use haven_audit::{ChangeAuditor, DEFAULT_PRIMARY_KEY, MemoryAuditStore};
//! use haven_core::{ActorId, Snapshot};
//!
//! # async fn demo() {
//! let auditor = ChangeAuditor::new(MemoryAuditStore::new());
//! let before = Snapshot::new().with("id", 7).with("pasture", "East Field");
//! let after = Snapshot::new().with("id", 7).with("pasture", "Barn Area");
//!
//! let actor = ActorId::from(3);
//! let outcome = auditor
//!     .record_changes(Some(&actor), "horses", &before, &after, DEFAULT_PRIMARY_KEY)
//!     .await;
//! assert_eq!(outcome.written, 1);
//! # }
//! ```
//!
//! [`Snapshot`]: haven_core::Snapshot

pub mod auditor;
pub mod diff;
pub mod memory;
pub mod store;

pub use auditor::{AuditOutcome, ChangeAuditor};
pub use diff::{DEFAULT_PRIMARY_KEY, FieldChange, diff, text_serialize};
pub use memory::MemoryAuditStore;
pub use store::{AuditStore, AuditStoreError};
