//! Repository modules for audit storage.
//!
//! Each module adds methods to `AuditLog` via `impl AuditLog` blocks.

pub mod audit;
