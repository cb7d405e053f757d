//! Searchable field values.
//!
//! The value shape is decided when data enters the store and matched
//! exhaustively afterwards. JSON values outside the variant set (booleans,
//! null, nested objects, non-text list entries) are rejected at ingestion
//! with an [`IngestError`].

use crate::error::IngestError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single searchable value on a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// A list of text entries.
    TextList(Vec<String>),
    /// A number, matched and sorted by its decimal rendering.
    Number(f64),
}

impl FieldValue {
    /// Returns the text content when this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Converts a JSON value, rejecting shapes outside the variant set.
    pub(crate) fn from_json(field: &str, value: &Value) -> Result<Self, IngestError> {
        match value {
            Value::String(text) => Ok(FieldValue::Text(text.clone())),
            Value::Number(number) => match number.as_f64() {
                Some(number) => Ok(FieldValue::Number(number)),
                None => Err(IngestError::Unsupported {
                    field: field.to_string(),
                    kind: "number",
                }),
            },
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(text) => list.push(text.clone()),
                        _ => {
                            return Err(IngestError::ListEntry {
                                field: field.to_string(),
                            });
                        }
                    }
                }
                Ok(FieldValue::TextList(list))
            }
            other => Err(IngestError::Unsupported {
                field: field.to_string(),
                kind: json_kind(other),
            }),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::TextList(items) => f.write_str(&items.join(", ")),
            FieldValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::TextList(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::TextList(items.into_iter().map(str::to_string).collect())
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        FieldValue::Number(number)
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        FieldValue::Number(number as f64)
    }
}

/// Short JSON kind name for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
