//! Schema-agnostic field diffing.
//!
//! Values are compared with strict equality (see [`FieldValue::strict_eq`]):
//! no type coercion and no deep comparison. `5` and `"5"` are a change.

use serde::Serialize;

use haven_core::{FieldValue, Snapshot};

/// Primary-key field excluded from diffs unless the caller names another.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Bookkeeping fields that change on every write and carry no audit meaning.
pub const TIMESTAMP_FIELDS: &[&str] = &["created_at", "updated_at", "last_updated"];

/// One field-level delta, ready to become an audit row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub field_name: String,
    pub before_value: Option<String>,
    pub after_value: Option<String>,
}

/// Text form of a possibly-undefined field value.
///
/// `None` (undefined) and `Null` both map to `None`; everything else uses
/// [`FieldValue::to_text`].
#[must_use]
pub fn text_serialize(value: Option<&FieldValue>) -> Option<String> {
    value.and_then(FieldValue::to_text)
}

/// Whether `field` is excluded from diffing for the given primary key.
#[must_use]
pub fn is_ignored(field: &str, primary_key_field: &str) -> bool {
    field == primary_key_field || TIMESTAMP_FIELDS.contains(&field)
}

/// Strict inequality over possibly-undefined values.
fn differs(before: Option<&FieldValue>, after: Option<&FieldValue>) -> bool {
    match (before, after) {
        (None, None) => false,
        (Some(a), Some(b)) => !a.strict_eq(b),
        _ => true,
    }
}

/// Compute the field-level changes between two snapshots of one record.
///
/// Fields are visited in `before`'s order, then fields only present in
/// `after`. A field missing on one side is compared as undefined. Ignored
/// fields (`primary_key_field` and [`TIMESTAMP_FIELDS`]) never appear.
///
/// A pair that differs only as undefined vs `null` is dropped: both sides
/// serialize to no value, and audit rows never record a no-op.
#[must_use]
pub fn diff(before: &Snapshot, after: &Snapshot, primary_key_field: &str) -> Vec<FieldChange> {
    let after_only = after.field_names().filter(|name| !before.contains(name));
    before
        .field_names()
        .chain(after_only)
        .filter(|name| !is_ignored(name, primary_key_field))
        .filter_map(|name| {
            let before_val = before.get(name);
            let after_val = after.get(name);
            if !differs(before_val, after_val) {
                return None;
            }
            let before_value = text_serialize(before_val);
            let after_value = text_serialize(after_val);
            if before_value.is_none() && after_value.is_none() {
                return None;
            }
            Some(FieldChange {
                field_name: name.to_string(),
                before_value,
                after_value,
            })
        })
        .collect()
}

/// Changes describing a freshly created record: every non-null, non-ignored
/// field with no prior value.
#[must_use]
pub fn creation_changes(snapshot: &Snapshot) -> Vec<FieldChange> {
    present_fields(snapshot)
        .map(|(name, value)| FieldChange {
            field_name: name.to_string(),
            before_value: None,
            after_value: value.to_text(),
        })
        .collect()
}

/// Changes describing a deleted record: every non-null, non-ignored field
/// with no value afterwards.
#[must_use]
pub fn deletion_changes(snapshot: &Snapshot) -> Vec<FieldChange> {
    present_fields(snapshot)
        .map(|(name, value)| FieldChange {
            field_name: name.to_string(),
            before_value: value.to_text(),
            after_value: None,
        })
        .collect()
}

fn present_fields(snapshot: &Snapshot) -> impl Iterator<Item = (&str, &FieldValue)> {
    snapshot
        .iter()
        .filter(|(name, value)| !is_ignored(name, DEFAULT_PRIMARY_KEY) && !value.is_null())
}
