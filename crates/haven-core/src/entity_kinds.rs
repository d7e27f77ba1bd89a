//! Entity-kind labels used by the sanctuary's CRUD handlers.
//!
//! Entity kinds are free text so new tables can be audited without a schema
//! change. These constants name the kinds the sanctuary backend writes today.

pub const HORSES: &str = "horses";
pub const MEDICAL_RECORDS: &str = "medical_records";
pub const ACTION_TAKEN: &str = "action_taken";
pub const DAILY_OBSERVATIONS: &str = "daily_observations";
pub const TASKS: &str = "tasks";
pub const USERS: &str = "users";
pub const PUSH_TOKENS: &str = "push_tokens";

/// All known entity kinds.
pub const ALL_KINDS: &[&str] = &[
    HORSES,
    MEDICAL_RECORDS,
    ACTION_TAKEN,
    DAILY_OBSERVATIONS,
    TASKS,
    USERS,
    PUSH_TOKENS,
];

/// Whether `kind` is one of the labels above.
#[must_use]
pub fn is_known(kind: &str) -> bool {
    ALL_KINDS.contains(&kind)
}

/// Check that an entity-kind label is usable for an audit row.
///
/// Only emptiness is rejected; unknown kinds are allowed.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `kind` is empty or only whitespace.
pub fn validate(kind: &str) -> Result<(), crate::errors::CoreError> {
    if kind.trim().is_empty() {
        return Err(crate::errors::CoreError::Validation(
            "entity kind must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in ALL_KINDS {
            assert!(seen.insert(*kind), "duplicate kind: {kind}");
        }
    }

    #[test]
    fn unknown_kinds_still_validate() {
        assert!(!is_known("stalls"));
        assert!(validate("stalls").is_ok());
    }

    #[test]
    fn blank_kind_rejected() {
        assert!(validate("  ").is_err());
    }
}
