//! Short type labels for schemas.

use crate::openapi::{MediaType, SchemaRef};

/// Label of a schema that is absent altogether.
pub const ANY_SCHEMA_LABEL: &str = "any";

/// Label of a schema that is present but declares neither a reference nor a type.
pub const OBJECT_SCHEMA_LABEL: &str = "object";

const ARRAY_MARKER: &str = "[]";

/// Returns a short, human-readable type label for a schema.
///
/// - absent: [`ANY_SCHEMA_LABEL`]
/// - reference: the component name (`#/components/schemas/Foo` gives `Foo`)
/// - array with items: `[]` followed by the label of the items (`[]Foo`)
/// - no declared type: [`OBJECT_SCHEMA_LABEL`]
/// - otherwise: the declared type verbatim
pub fn schema_label(schema: Option<&SchemaRef>) -> String {
    let Some(schema) = schema else {
        return ANY_SCHEMA_LABEL.to_string();
    };

    if let Some(name) = schema.ref_name() {
        return name.to_string();
    }

    match (schema.schema_type.as_deref(), schema.items.as_deref()) {
        (Some("array"), Some(items)) => format!("{ARRAY_MARKER}{}", schema_label(Some(items))),
        (None | Some(""), _) => OBJECT_SCHEMA_LABEL.to_string(),
        (Some(schema_type), _) => schema_type.to_string(),
    }
}

/// Label of the schema of a media type. A media type without a schema is an
/// unconstrained object.
pub(crate) fn media_schema_label(media: &MediaType) -> String {
    match &media.schema {
        Some(schema) => schema_label(Some(schema)),
        None => OBJECT_SCHEMA_LABEL.to_string(),
    }
}
