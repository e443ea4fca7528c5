//! Schema reference entity.

/// A schema as seen by the help pipeline: a named reference, an inline type (with
/// optional array items), or nothing at all.
///
/// Only these three keywords are read. Properties, composition keywords and validation
/// constraints of inline schemas are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct SchemaRef {
    /// The reference path to a component (e.g., "#/components/schemas/SeriesModelV1").
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    /// The declared primitive type (e.g., "string", "integer", "array").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// The schema of the array items, for array types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaRef>>,
}

impl SchemaRef {
    /// Creates a reference to a named component.
    pub fn new_ref(ref_path: impl Into<String>) -> Self {
        Self {
            ref_path: Some(ref_path.into()),
            ..Self::default()
        }
    }

    /// Creates an inline schema of the given primitive type.
    pub fn new_type(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// Creates an inline array schema with the given item schema.
    pub fn array(items: SchemaRef) -> Self {
        Self {
            ref_path: None,
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
        }
    }

    /// Returns the component name of a reference: the segment after the last `/`.
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| path.rsplit('/').next().unwrap_or(path))
    }
}
