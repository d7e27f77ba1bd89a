//! Point-in-time state of one sanctuary record.

use serde_json::Value;

use crate::errors::CoreError;
use crate::field_value::FieldValue;

/// An ordered mapping from field name to [`FieldValue`].
///
/// Fields keep insertion order. Records are small (tens of fields), so lookup
/// is a linear scan. Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    fields: Vec<(String, FieldValue)>,
}

impl Snapshot {
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field. `None` means the field is undefined in this snapshot.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Build a snapshot from a JSON object.
    ///
    /// Field order follows the object's key order as written in the source
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotAnObject` for any non-object JSON value.
    pub fn from_json(value: Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(CoreError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    /// Parse JSON text into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Json` for malformed JSON and
    /// `CoreError::NotAnObject` when the document is not an object.
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        Self::from_json(serde_json::from_str(text)?)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K, V> FromIterator<(K, V)> for Snapshot
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (name, value) in iter {
            snapshot.insert(name, value);
        }
        snapshot
    }
}
