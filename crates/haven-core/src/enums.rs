//! Enums shared by the audit crates.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ChangeKind
// ---------------------------------------------------------------------------

/// What happened to a single field, as recorded in one audit row.
///
/// Not persisted: it is derived from which of `before_value` / `after_value`
/// is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl ChangeKind {
    /// Derive the kind from the presence of a before and an after value.
    #[must_use]
    pub const fn classify(has_before: bool, has_after: bool) -> Self {
        match (has_before, has_after) {
            (false, true) => Self::Created,
            (true, false) => Self::Deleted,
            _ => Self::Updated,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
