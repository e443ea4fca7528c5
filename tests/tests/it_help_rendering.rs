//! Integration tests for the `-h` and `-hh` help of the embedded MangaUpdates commands.

use mucli_core::{Catalog, CatalogEntry, render_json, render_text};

#[test]
fn render_text_of_retrieve_series_aligns_arguments() {
    //* Given
    let catalog = embedded_catalog();
    let entry = find(&catalog, "series", "retrieveSeries");

    //* When
    let text = render_text(&entry.help);

    //* Then
    insta::assert_snapshot!(text, @r"
    Usage: mucli series retrieveSeries --id <integer(int64)> [--partial <boolean>]

    Description:
      Retrieve a series

    Arguments:
      --id      <integer(int64)> Series id (required)
      --partial <boolean>        Return a partial record without rank and category data (default: false)

    Use -h for JSON help, -hh for this human-readable help.
    ");
}

#[test]
fn render_text_of_auth_command_notes_authentication() {
    //* Given
    let catalog = embedded_catalog();
    let entry = find(&catalog, "releases", "deleteRelease");

    //* When
    let text = render_text(&entry.help);

    //* Then
    assert!(
        text.starts_with("Usage: mucli releases deleteRelease --id <integer(int64)> [REQUIRES AUTH]\n"),
        "unexpected usage line:\n{text}"
    );
    assert!(text.contains("  NOTE: This command requires authentication with the API.\n"));
}

#[test]
fn render_json_of_every_command_complies_with_schema() {
    //* Given
    let catalog = embedded_catalog();
    let schema_value = serde_json::from_str(include_str!("assets/structured_help.schema.json"))
        .expect("should parse structured help schema");
    let schema = jsonschema::validator_for(&schema_value).expect("should compile JSON schema");

    for (_, entries) in catalog.groups() {
        for entry in entries {
            //* When
            let json = render_json(&entry.help).expect("should render JSON help");

            //* Then
            let value: serde_json::Value =
                serde_json::from_str(&json).expect("rendered help should be JSON");
            let errors: Vec<String> = schema
                .iter_errors(&value)
                .map(|err| format!("- {}: {}", err.instance_path, err))
                .collect();
            assert!(
                errors.is_empty(),
                "help of {} does not comply with schema:\n{}",
                entry.operation_id,
                errors.join("\n")
            );
        }
    }
}

#[test]
fn render_json_of_command_without_arguments_uses_none_and_generic_errors() {
    //* Given
    let catalog = embedded_catalog();
    let entry = find(&catalog, "releases", "retrieveReleasesRSS");

    //* When
    let json = render_json(&entry.help).expect("should render JSON help");

    //* Then
    let value: serde_json::Value = serde_json::from_str(&json).expect("should parse JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "arguments": "None",
            "authentication_required": false,
            "description": "RSS feed of the latest releases",
            "error_examples": {"Generic": "Standard API errors."},
            "expected_input_schema": "None",
            "expected_output_schema": "XML Output (on 200)",
            "usage": "mucli releases retrieveReleasesRSS"
        })
    );
}

#[test]
fn render_json_keys_are_sorted() {
    //* Given
    let catalog = embedded_catalog();
    let entry = find(&catalog, "releases", "searchReleasesPost");

    //* When
    let json = render_json(&entry.help).expect("should render JSON help");

    //* Then
    let keys: Vec<&str> = json
        .lines()
        .filter(|line| line.starts_with("  \""))
        .filter_map(|line| line.trim_start().strip_prefix('"')?.split('"').next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted, "top-level keys should be in lexical order");
    assert_eq!(keys.len(), 7);
}

fn embedded_catalog() -> Catalog {
    mucli::embedded_catalog().expect("embedded API description should load")
}

fn find<'a>(catalog: &'a Catalog, subprogram: &str, command: &str) -> &'a CatalogEntry {
    catalog
        .find(subprogram, command)
        .unwrap_or_else(|| panic!("{subprogram} {command} should exist"))
}
