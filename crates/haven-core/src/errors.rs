//! Cross-cutting error types for Haven.
//!
//! Crate-specific errors (`AuditStoreError`, `DatabaseError`, `ConfigError`)
//! live in their own crates. The CLI converges everything through `anyhow`.

use thiserror::Error;

/// Errors raised while building core values from untrusted input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A snapshot source was not a JSON object.
    #[error("Snapshot must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    /// Data failed validation (empty labels, malformed ids).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Snapshot text could not be parsed as JSON.
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
