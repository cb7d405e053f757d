//! Schema: which fields are searched for each record type.

use crate::error::ConfigError;
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Maps a record type to the ordered list of fields searched for that type.
///
/// Supplied once at setup and read-only afterwards. Every listed field is
/// expected to be present on every record of that type; an absent field is a
/// configuration error surfaced during matching, not a "no match".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    entries: BTreeMap<TypeTag, Vec<String>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the searchable fields for a type, replacing any prior entry.
    pub fn insert(
        &mut self,
        tag: TypeTag,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.entries
            .insert(tag, fields.into_iter().map(Into::into).collect());
    }

    /// The searchable fields for a type, in declaration order.
    pub fn fields_for(&self, tag: &str) -> Option<&[String]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered type tags.
    pub fn types(&self) -> impl Iterator<Item = &TypeTag> + '_ {
        self.entries.keys()
    }

    /// Loads a schema from a TOML table of `Type = ["field", ...]` entries.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl FromIterator<(TypeTag, Vec<String>)> for Schema {
    fn from_iter<I: IntoIterator<Item = (TypeTag, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests;
