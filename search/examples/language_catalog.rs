//! Walks through schema setup, querying, scoping, and loading more records.
//!
//! Run with: `cargo run -q --example language_catalog -p sift_search`

use sift_core::ResourceStore;
use sift_core::types::{Record, Schema, Scope, TypeTag};
use sift_search::{SearchConfig, SearchEngine, SearchResults};

fn main() {
    tracing_subscriber::fmt().init();

    let mut schema = Schema::new();
    schema.insert(tag("Language"), ["name", "type"]);
    schema.insert(tag("OperatingSystem"), ["name"]);

    let records = vec![
        language("TypeScript"),
        language("Python"),
        language("Rust"),
        operating_system("Linux"),
        operating_system("FreeBSD"),
    ];
    let suggestions = vec![language("TypeScript"), operating_system("Linux")];

    let store = ResourceStore::new(schema, records, suggestions);
    let mut engine = SearchEngine::new(store, SearchConfig::default());

    print_results("suggestions (empty query)", engine.recompute("", &Scope::All));
    print_results("query \"script\"", engine.recompute("script", &Scope::All));
    print_results(
        "empty query scoped to OperatingSystem",
        engine.recompute("", &Scope::single(tag("OperatingSystem"))),
    );

    engine.load(vec![language("JavaScript")], true);
    print_results(
        "query \"script\" after loading JavaScript",
        engine.recompute("script", &Scope::All),
    );

    println!("\nStore now holds {} records", engine.record_count());
}

fn tag(s: &str) -> TypeTag {
    TypeTag::try_from(s).expect("valid type tag")
}

fn language(name: &str) -> Record {
    Record::new()
        .with_field("type", "Language")
        .with_field("name", name)
}

fn operating_system(name: &str) -> Record {
    Record::new()
        .with_field("type", "OperatingSystem")
        .with_field("name", name)
}

fn print_results(label: &str, results: sift_core::Result<SearchResults>) {
    let results = results.expect("derivation failed");
    println!("\n[{label}]");
    for record in results.iter() {
        let name = record
            .get("name")
            .map(ToString::to_string)
            .unwrap_or_default();
        println!("  {name}");
    }
}
