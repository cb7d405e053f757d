//! Open record type: a mapping from field name to searchable value.

use crate::error::IngestError;
use crate::types::FieldValue;
use crate::types::field::json_kind;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A single searchable record.
///
/// Open-ended: any field may be present. The discriminant field (by default
/// `type`) names the record's type and must hold a `Text` value to take part
/// in schema lookup and scoping. Records are immutable once loaded; the
/// collection changes only through [`ResourceStore::load`].
///
/// [`ResourceStore::load`]: crate::store::ResourceStore::load
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The record's type discriminant, when present as text.
    pub fn discriminant(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Builds a record from a JSON object.
    pub fn from_json(value: &Value) -> Result<Self, IngestError> {
        let Value::Object(map) = value else {
            return Err(IngestError::NotAnObject(json_kind(value)));
        };

        let mut record = Record::new();
        for (name, value) in map {
            record
                .fields
                .insert(name.clone(), FieldValue::from_json(name, value)?);
        }
        Ok(record)
    }
}

/// Builds records from a JSON array of objects.
pub fn records_from_json(value: &Value) -> Result<Vec<Record>, IngestError> {
    let Value::Array(items) = value else {
        return Err(IngestError::NotAList(json_kind(value)));
    };

    items.iter().map(Record::from_json).collect()
}

#[cfg(test)]
mod tests;
