use super::*;
use std::io::Write;

fn tag(s: &str) -> TypeTag {
    TypeTag::try_from(s).unwrap()
}

#[test]
fn fields_keep_declaration_order() {
    let mut schema = Schema::new();
    schema.insert(tag("Language"), ["name", "type"]);

    assert_eq!(
        schema.fields_for("Language"),
        Some(&["name".to_string(), "type".to_string()][..])
    );
}

#[test]
fn unknown_type_has_no_fields() {
    let schema = Schema::new();
    assert_eq!(schema.fields_for("Unknown"), None);
    assert!(!schema.contains("Unknown"));
    assert!(schema.is_empty());
}

#[test]
fn insert_replaces_prior_entry() {
    let mut schema = Schema::new();
    schema.insert(tag("Language"), ["name", "type"]);
    schema.insert(tag("Language"), ["name"]);

    assert_eq!(schema.len(), 1);
    assert_eq!(schema.fields_for("Language"), Some(&["name".to_string()][..]));
}

#[test]
fn from_iterator_collects_entries() {
    let schema: Schema = [
        (tag("Language"), vec!["name".to_string()]),
        (tag("OperatingSystem"), vec!["name".to_string()]),
    ]
    .into_iter()
    .collect();

    assert_eq!(schema.len(), 2);
    let types: Vec<&str> = schema.types().map(|t| t.as_str()).collect();
    assert_eq!(types, vec!["Language", "OperatingSystem"]);
}

#[test]
fn load_from_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Language = [\"name\", \"type\"]").unwrap();
    writeln!(file, "OperatingSystem = [\"name\"]").unwrap();

    let schema = Schema::load(file.path()).unwrap();
    assert_eq!(schema.len(), 2);
    assert_eq!(
        schema.fields_for("OperatingSystem"),
        Some(&["name".to_string()][..])
    );
}

#[test]
fn load_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Schema::load(&dir.path().join("schema.toml")).is_err());
}

#[test]
fn load_rejects_empty_type_names() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "\"  \" = [\"name\"]").unwrap();

    assert!(Schema::load(file.path()).is_err());
}
