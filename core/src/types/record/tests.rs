use super::*;
use serde_json::json;

#[test]
fn builder_and_get() {
    let record = Record::new()
        .with_field("type", "Language")
        .with_field("name", "Rust");

    assert_eq!(record.len(), 2);
    assert_eq!(record.get("name"), Some(&FieldValue::Text("Rust".to_string())));
    assert_eq!(record.get("missing"), None);
}

#[test]
fn discriminant_requires_text() {
    let record = Record::new().with_field("type", 3.0);
    assert_eq!(record.discriminant("type"), None);
}

#[test]
fn discriminant_reads_configured_field() {
    let record = Record::new().with_field("kind", "Language");
    assert_eq!(record.discriminant("kind"), Some("Language"));
    assert_eq!(record.discriminant("type"), None);
}

#[test]
fn insert_replaces_existing_field() {
    let mut record = Record::new().with_field("name", "Rust");
    record.insert("name", "Go");
    assert_eq!(record.get("name"), Some(&FieldValue::Text("Go".to_string())));
    assert_eq!(record.len(), 1);
}

#[test]
fn iter_yields_fields_in_name_order() {
    let record = Record::new()
        .with_field("name", "Rust")
        .with_field("age", 14.0);

    let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["age", "name"]);
}

#[test]
fn from_json_object() {
    let record = Record::from_json(&json!({
        "type": "Language",
        "name": "TypeScript",
        "ratings": ["1", "2", "3"],
        "stars": 97
    }))
    .unwrap();

    assert_eq!(record.discriminant("type"), Some("Language"));
    assert_eq!(record.get("stars"), Some(&FieldValue::Number(97.0)));
    assert_eq!(record.get("ratings"), Some(&FieldValue::from(vec!["1", "2", "3"])));
}

#[test]
fn from_json_rejects_non_object() {
    let err = Record::from_json(&json!("x")).unwrap_err();
    assert!(matches!(err, IngestError::NotAnObject("text")));
}

#[test]
fn from_json_propagates_field_errors() {
    let err = Record::from_json(&json!({"name": "Rust", "stable": true})).unwrap_err();
    assert!(matches!(err, IngestError::Unsupported { .. }));
}

#[test]
fn records_from_json_list() {
    let records = records_from_json(&json!([
        {"type": "Language", "name": "Rust"},
        {"type": "Language", "name": "Go"},
    ]))
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].discriminant("type"), Some("Language"));
}

#[test]
fn records_from_json_rejects_non_list() {
    let err = records_from_json(&json!({})).unwrap_err();
    assert!(matches!(err, IngestError::NotAList("object")));
}
