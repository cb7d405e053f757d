//! Substring matching against individual field values.

use sift_core::types::FieldValue;

/// Query text normalized once per derivation.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedQuery {
    /// Trimmed and lowercased, for text comparison.
    lowered: String,
    /// Trimmed only. Digits have no case, so number renderings are compared
    /// against the query as typed.
    trimmed: String,
}

impl NormalizedQuery {
    pub(crate) fn new(raw: &str) -> Self {
        let trimmed = raw.trim().to_string();
        let lowered = trimmed.to_lowercase();
        Self { lowered, trimmed }
    }
}

/// Returns true if the query occurs within the field value.
pub(crate) fn value_contains(value: &FieldValue, query: &NormalizedQuery) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(&query.lowered),
        FieldValue::TextList(items) => items
            .iter()
            .any(|item| item.to_lowercase().contains(&query.lowered)),
        FieldValue::Number(number) => number.to_string().contains(&query.trimmed),
    }
}
