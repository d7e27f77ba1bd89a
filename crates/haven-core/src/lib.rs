//! # haven-core
//!
//! Core types shared across the Haven audit crates.
//!
//! - `FieldValue` and `Snapshot`: schema-agnostic record state handed over by
//!   CRUD handlers
//! - `ActorId`: opaque identity of the user performing a change
//! - `AuditEntry` / `NewAuditEntry`: the persisted unit of change history
//! - `ChangeKind`: whether a field was created, updated or deleted
//! - Entity-kind labels for the sanctuary's tables
//! - Cross-cutting error types

pub mod actor;
pub mod entities;
pub mod entity_kinds;
pub mod enums;
pub mod errors;
pub mod field_value;
pub mod snapshot;

pub use actor::ActorId;
pub use field_value::FieldValue;
pub use snapshot::Snapshot;
