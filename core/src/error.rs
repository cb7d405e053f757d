use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Schema/data inconsistencies surfaced while matching or sorting.
///
/// These indicate a misconfigured schema or malformed records, not an
/// expected runtime condition, and are propagated rather than swallowed.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("no schema entry for record type: {0}")]
    UnknownType(String),

    #[error("record has no {0} field")]
    MissingDiscriminant(String),

    #[error("field {0} is absent on a record")]
    MissingField(String),
}

/// Rejected input encountered while building records from JSON.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("records must be a JSON list, got {0}")]
    NotAList(&'static str),

    #[error("field {field} holds an unsupported {kind} value")]
    Unsupported { field: String, kind: &'static str },

    #[error("field {field} has a non-text list entry")]
    ListEntry { field: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
