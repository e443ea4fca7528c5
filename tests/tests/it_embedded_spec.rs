//! Integration tests for the MangaUpdates API description compiled into `mucli`.

use std::collections::BTreeMap;

use mucli_core::{Catalog, ErrorExamples};

#[test]
fn embedded_catalog_has_every_subprogram() {
    //* When
    let catalog = mucli::embedded_catalog().expect("embedded API description should load");

    //* Then
    let subprograms: Vec<_> = catalog.subprograms().collect();
    assert_eq!(
        subprograms,
        [
            "account",
            "authors",
            "categories",
            "genre",
            "groups",
            "misc",
            "publishers",
            "releases",
            "series"
        ]
    );
    assert!(
        catalog.subprograms().all(|name| catalog.description(name).is_some()),
        "every subprogram should be described"
    );
}

#[test]
fn embedded_catalog_summarizes_input_shapes() {
    //* Given
    let catalog = embedded_catalog();

    //* Then
    assert_eq!(
        input_shape(&catalog, "series", "updateSeriesImage"),
        "Request Body: Multipart Form Data (required)"
    );
    assert_eq!(
        input_shape(&catalog, "series", "searchSeriesPost"),
        "Request Body Schema: <SeriesSearchRequestV1:L1> (required)"
    );
    assert_eq!(
        input_shape(&catalog, "authors", "retrieveAuthorSeries"),
        "Request Body Schema: <AuthorSeriesRequestV1:L1>"
    );
    assert_eq!(input_shape(&catalog, "series", "retrieveSeries"), "Path/Query Parameters");
    assert_eq!(input_shape(&catalog, "releases", "retrieveReleasesRSS"), "None");
}

#[test]
fn embedded_catalog_summarizes_output_shapes() {
    //* Given
    let catalog = embedded_catalog();

    //* Then
    assert_eq!(
        output_shape(&catalog, "series", "retrieveSeries"),
        "Schema (on 200): <SeriesModelV1:L1>"
    );
    assert_eq!(
        output_shape(&catalog, "genre", "retrieveGenres"),
        "Schema (on 200): <[]GenresModelV1:L1>"
    );
    assert_eq!(output_shape(&catalog, "releases", "deleteRelease"), "No Content (on 204)");
    assert_eq!(output_shape(&catalog, "groups", "retrieveGroupRSS"), "XML Output (on 200)");
}

#[test]
fn embedded_catalog_lists_misc_commands() {
    //* Given
    let catalog = embedded_catalog();

    //* When
    let commands: Vec<&str> = catalog
        .group("misc")
        .unwrap_or_default()
        .iter()
        .map(|entry| entry.operation_id.as_str())
        .collect();

    //* Then
    assert_eq!(commands, ["retrieveSlowRequests", "retrieveThanks"]);
    assert_eq!(
        output_shape(&catalog, "misc", "retrieveThanks"),
        "Schema (on 200): <[]ThanksModelV1:L1>"
    );
}

#[test]
fn embedded_catalog_maps_error_responses() {
    //* Given
    let catalog = embedded_catalog();

    //* When
    let entry = catalog
        .find("series", "retrieveSeries")
        .expect("retrieveSeries should exist");

    //* Then
    assert_eq!(
        entry.help.error_examples,
        ErrorExamples::ByStatus(BTreeMap::from([(
            "404".to_string(),
            "Series not found".to_string()
        )]))
    );
}

#[test]
fn embedded_catalog_marks_only_secured_commands() {
    //* Given
    let catalog = embedded_catalog();

    //* When
    let secured: Vec<&str> = catalog
        .groups()
        .flat_map(|(_, entries)| entries)
        .filter(|entry| entry.help.auth_required)
        .map(|entry| entry.operation_id.as_str())
        .collect();

    //* Then
    assert_eq!(
        secured,
        ["logout", "updateAuthor", "deleteRelease", "updateSeriesImage"]
    );
}

fn embedded_catalog() -> Catalog {
    mucli::embedded_catalog().expect("embedded API description should load")
}

fn input_shape<'a>(catalog: &'a Catalog, subprogram: &str, command: &str) -> &'a str {
    catalog
        .find(subprogram, command)
        .and_then(|entry| entry.help.input_shape.as_str())
        .unwrap_or_else(|| panic!("{subprogram} {command} should have an input shape"))
}

fn output_shape<'a>(catalog: &'a Catalog, subprogram: &str, command: &str) -> &'a str {
    catalog
        .find(subprogram, command)
        .and_then(|entry| entry.help.output_shape.as_str())
        .unwrap_or_else(|| panic!("{subprogram} {command} should have an output shape"))
}
