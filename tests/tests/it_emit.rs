//! Integration tests for writing help catalogs to disk.

use mucli_core::{
    Catalog, CatalogOptions, DocumentFormat, JsonEmitter, RustSourceEmitter, clean_generated,
    generate_catalog, parse_document, write_catalog,
};

const FIXTURE: &str = include_str!("assets/catalog.yaml");

#[test]
fn write_catalog_with_json_emitter_writes_one_file_per_subprogram() {
    //* Given
    let catalog = fixture_catalog();
    let out_dir = tempfile::tempdir().expect("failed to create temp dir");

    //* When
    let written =
        write_catalog(&catalog, &JsonEmitter, out_dir.path()).expect("should write catalog");

    //* Then
    assert_eq!(
        written,
        vec![
            out_dir.path().join("genre/genre_help.json"),
            out_dir.path().join("series/series_help.json"),
        ]
    );

    let series: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(&written[1]).expect("should read generated file"),
    )
    .expect("generated file should be JSON");
    let ids: Vec<_> = series
        .as_array()
        .expect("generated file should hold an array")
        .iter()
        .map(|entry| entry["operation_id"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(series[1]["method"], "post");
    assert_eq!(series[1]["path"], "/b");
    assert_eq!(series[1]["help"]["auth_required"], true);
    assert!(
        series[0].get("operation").is_none(),
        "raw operations should not be serialized"
    );
}

#[test]
fn write_catalog_with_rust_emitter_writes_constructor_functions() {
    //* Given
    let catalog = fixture_catalog();
    let out_dir = tempfile::tempdir().expect("failed to create temp dir");

    //* When
    let written = write_catalog(&catalog, &RustSourceEmitter, out_dir.path())
        .expect("should write catalog");

    //* Then
    let genre = std::fs::read_to_string(out_dir.path().join("genre/genre_generated_help.rs"))
        .expect("should read generated genre module");
    assert_eq!(written.len(), 2);
    assert!(genre.starts_with("// Code generated by mucli generate; DO NOT EDIT.\n"));
    assert!(genre.contains("pub fn help_retrieve_genres() -> HelpRecord {"));
    assert!(genre.contains("\"mucli genre retrieveGenres\""));
}

#[test]
fn clean_generated_removes_only_generated_files() {
    //* Given
    let catalog = fixture_catalog();
    let out_dir = tempfile::tempdir().expect("failed to create temp dir");
    write_catalog(&catalog, &JsonEmitter, out_dir.path()).expect("should write JSON catalog");
    write_catalog(&catalog, &RustSourceEmitter, out_dir.path()).expect("should write Rust catalog");
    let handwritten = out_dir.path().join("series/mod.rs");
    std::fs::write(&handwritten, "pub mod series_generated_help;\n")
        .expect("should write handwritten file");

    //* When
    let mut removed = clean_generated(out_dir.path(), catalog.subprograms().chain(["absent"]))
        .expect("should clean generated files");

    //* Then
    removed.sort();
    assert_eq!(
        removed,
        vec![
            out_dir.path().join("genre/genre_generated_help.rs"),
            out_dir.path().join("genre/genre_help.json"),
            out_dir.path().join("series/series_generated_help.rs"),
            out_dir.path().join("series/series_help.json"),
        ]
    );
    assert!(handwritten.is_file(), "handwritten files should be kept");
}

fn fixture_catalog() -> Catalog {
    let document = parse_document(FIXTURE, DocumentFormat::Yaml).expect("fixture should parse");
    generate_catalog(&document, &CatalogOptions::default())
}
