//! Integration tests for building help catalogs from API descriptions.

use std::collections::BTreeMap;

use mucli_core::{
    Catalog, CatalogOptions, DocumentFormat, ErrorExamples, Info, Method, OpenApi, Operation,
    SecurityRequirement, generate_catalog, parse_document,
};

const FIXTURE: &str = include_str!("assets/catalog.yaml");

#[test]
fn generate_catalog_sorts_entries_by_operation_id() {
    //* Given
    let document = fixture_document();

    //* When
    let catalog = generate_catalog(&document, &CatalogOptions::default());

    //* Then
    let subprograms: Vec<_> = catalog.subprograms().collect();
    assert_eq!(subprograms, ["genre", "series"], "subprograms should be sorted by name");
    assert_eq!(
        command_names(&catalog, "series"),
        ["a", "b", "c"],
        "entries should be sorted by operation id, not by path order"
    );
}

#[test]
fn generate_catalog_skips_unnamed_and_duplicate_operations() {
    //* Given
    let document = fixture_document();

    //* When
    let catalog = generate_catalog(&document, &CatalogOptions::default());

    //* Then
    assert_eq!(catalog.len(), 4, "untagged, anonymous and duplicate operations are skipped");
    assert_eq!(command_names(&catalog, "genre"), ["retrieveGenres"]);
    let kept = catalog.find("series", "a").expect("first 'a' should be kept");
    assert_eq!(kept.path, "/a");
}

#[test]
fn generate_catalog_groups_by_first_tag_only() {
    //* Given
    let document = fixture_document();

    //* When
    let catalog = generate_catalog(&document, &CatalogOptions::default());

    //* Then
    assert!(catalog.group("misc").is_none(), "second tags never create a subprogram");
    assert_eq!(catalog.description("series"), Some("Series endpoints"));
    assert_eq!(catalog.description("genre"), None, "genre is not declared as a tag");
}

#[test]
fn generate_catalog_builds_usage_lines() {
    //* Given
    let document = fixture_document();
    let expected: BTreeMap<String, String> =
        serde_norway::from_str(include_str!("assets/expected_usage.yaml"))
            .expect("should parse expected usage lines");

    //* When
    let catalog = generate_catalog(&document, &CatalogOptions::default());

    //* Then
    let actual: BTreeMap<String, String> = catalog
        .groups()
        .flat_map(|(_, entries)| entries)
        .map(|entry| (entry.operation_id.clone(), entry.help.usage.clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn generate_catalog_with_custom_program_name_uses_it_in_usage() {
    //* Given
    let document = fixture_document();
    let options = CatalogOptions {
        program_name: "mu".to_string(),
    };

    //* When
    let catalog = generate_catalog(&document, &options);

    //* Then
    let entry = catalog.find("series", "c").expect("c should exist");
    assert_eq!(entry.help.usage, "mu series c");
}

#[test]
fn generate_catalog_summarizes_shapes_and_errors() {
    //* Given
    let document = fixture_document();

    //* When
    let catalog = generate_catalog(&document, &CatalogOptions::default());

    //* Then
    let a = catalog.find("series", "a").expect("a should exist");
    assert_eq!(a.help.input_shape.as_str(), Some("Path/Query Parameters"));
    assert_eq!(a.help.output_shape.as_str(), Some("Success Response (on 200, no content defined)"));
    assert_eq!(a.help.error_examples, ErrorExamples::Generic);
    assert_eq!(a.help.arguments[1].default.as_deref(), Some("25"));

    let b = catalog.find("series", "b").expect("b should exist");
    assert_eq!(
        b.help.input_shape.as_str(),
        Some("Request Body Schema: <SeriesSearchRequestV1:L1>")
    );
    assert_eq!(
        b.help.output_shape.as_str(),
        Some("Schema (on 201): <[]SeriesModelV1:L1>")
    );
    assert_eq!(
        b.help.error_examples.to_map(),
        BTreeMap::from([
            (
                "400".to_string(),
                "Bad search (Schema: <ValidationErrorV1:L1>)".to_string()
            ),
            ("500".to_string(), "Server error".to_string()),
        ])
    );
}

#[test]
fn generate_catalog_inherits_document_security() {
    //* Given
    let cases = [
        (false, false, false),
        (true, false, true),
        (false, true, true),
        (true, true, true),
    ];

    for (own, default, expected) in cases {
        let operation = Operation::new("retrieveSeries")
            .tag("series")
            .security(if own { bearer() } else { Vec::new() });
        let mut document =
            OpenApi::new(Info::new("Auth", "1")).operation("/series/{id}", Method::Get, operation);
        if default {
            document.security = bearer();
        }

        //* When
        let catalog = generate_catalog(&document, &CatalogOptions::default());

        //* Then
        let entry = catalog
            .find("series", "retrieveSeries")
            .expect("entry should exist");
        assert_eq!(
            entry.help.auth_required, expected,
            "own security: {own}, document security: {default}"
        );
        assert_eq!(entry.help.usage.ends_with(" [REQUIRES AUTH]"), expected);
    }
}

fn fixture_document() -> OpenApi {
    parse_document(FIXTURE, DocumentFormat::Yaml).expect("fixture should parse")
}

fn command_names<'a>(catalog: &'a Catalog, subprogram: &str) -> Vec<&'a str> {
    catalog
        .group(subprogram)
        .unwrap_or_default()
        .iter()
        .map(|entry| entry.operation_id.as_str())
        .collect()
}

fn bearer() -> Vec<SecurityRequirement> {
    vec![SecurityRequirement::from([("BearerAuth".to_string(), Vec::new())])]
}
