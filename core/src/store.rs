//! In-memory record store shared between the caller and the search layer.

use crate::types::{Record, Schema};

/// Owns the live record collection plus the session schema and suggestions.
///
/// Constructed once and handed to the search engine. [`load`] is the only
/// write path; the schema and the suggestions are fixed for the store's
/// lifetime. A load is fully applied before the next derivation reads the
/// collection, since both paths run on one logical thread and `load` takes
/// `&mut self`.
///
/// [`load`]: ResourceStore::load
pub struct ResourceStore {
    schema: Schema,
    records: Vec<Record>,
    suggestions: Vec<Record>,
}

/// Create operations.
impl ResourceStore {
    pub fn new(schema: Schema, initial: Vec<Record>, suggestions: Vec<Record>) -> Self {
        Self {
            schema,
            records: initial,
            suggestions,
        }
    }
}

/// Read operations.
impl ResourceStore {
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records shown verbatim for an empty query over an unrestricted scope.
    pub fn suggestions(&self) -> &[Record] {
        &self.suggestions
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

/// Mutation operations.
impl ResourceStore {
    /// Loads records into the store.
    ///
    /// With `merge` the new records are appended after the existing ones and
    /// duplicates are preserved; without it the collection is replaced
    /// wholesale.
    pub fn load(&mut self, records: Vec<Record>, merge: bool) {
        if merge {
            self.records.extend(records);
        } else {
            self.records = records;
        }
        tracing::debug!(total = self.records.len(), merge, "loaded records");
    }
}
