use serde::ser::{Serialize, SerializeMap, Serializer};

use super::field::{FIELD_COUNT, FieldId};

/// Live values of the vehicle form, one string per [`FieldId`].
///
/// Values are kept exactly as entered; numeric fields are not coerced.
/// Serializes as a flat JSON object with keys in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    values: [String; FIELD_COUNT],
}

impl FormState {
    /// Creates a form state with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    pub fn get(&self, id: FieldId) -> &str {
        &self.values[id.index()]
    }

    /// Replaces the value of a single field.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values[id.index()] = value.into();
    }

    /// Empties a single field.
    pub fn clear(&mut self, id: FieldId) {
        self.values[id.index()].clear();
    }

    /// Returns `true` if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    /// Resets every field to the empty default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterates `(field, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::all()
            .iter()
            .map(move |&id| (id, self.values[id.index()].as_str()))
    }

    /// Serializes the form to the JSON request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (id, value) in self.iter() {
            map.serialize_entry(id.key(), value)?;
        }
        map.end()
    }
}
