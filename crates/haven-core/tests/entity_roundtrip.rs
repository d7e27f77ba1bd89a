//! Serde roundtrip and JsonSchema validation tests for the audit entity types.

use chrono::Utc;
use schemars::schema_for;
use haven_core::ActorId;
use haven_core::entities::{AuditEntry, NewAuditEntry};
use haven_core::enums::ChangeKind;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    audit_entry_update_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 41,
        actor_id: Some(ActorId::from(3)),
        entity_kind: "horses".into(),
        field_name: Some("pasture".into()),
        before_value: Some("East Field".into()),
        after_value: Some("Barn Area".into()),
        event_time: Utc::now(),
    }
);

roundtrip_and_validate!(
    audit_entry_anonymous_roundtrip,
    AuditEntry,
    AuditEntry {
        id: 42,
        actor_id: None,
        entity_kind: "medical_records".into(),
        field_name: None,
        before_value: None,
        after_value: Some("colic".into()),
        event_time: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_audit_entry_roundtrip,
    NewAuditEntry,
    NewAuditEntry {
        actor_id: Some(ActorId::new("u-9")),
        entity_kind: "tasks".into(),
        field_name: Some("status".into()),
        before_value: Some("open".into()),
        after_value: None,
    }
);

#[test]
fn actor_id_serializes_flat_inside_entry() {
    let entry = NewAuditEntry {
        actor_id: Some(ActorId::from(12)),
        entity_kind: "horses".into(),
        field_name: Some("name".into()),
        before_value: None,
        after_value: Some("Comet".into()),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["actor_id"], serde_json::json!("12"));
    assert_eq!(entry.change_kind(), ChangeKind::Created);
}
