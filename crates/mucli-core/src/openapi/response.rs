//! Response and media type entities.

use std::fmt;

use serde::Deserialize as _;

use super::{map::Map, schema::SchemaRef};

/// Describes one response of an operation, keyed by status code in
/// [`Operation::responses`](super::Operation::responses).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Response {
    /// A description of the response.
    #[serde(default)]
    pub description: String,

    /// A map of media types to their schemas.
    ///
    /// `None` when the document declares no `content` at all, which is distinct from an
    /// empty `content` map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, MediaType>>,
}

impl Response {
    /// Creates a new response with the given description and no content.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content: None,
        }
    }

    /// Adds a media type, creating the content map if needed.
    pub fn content(mut self, content_type: impl Into<String>, media: MediaType) -> Self {
        self.content
            .get_or_insert_with(Map::new)
            .insert(content_type.into(), media);
        self
    }

    /// Declares an empty content map.
    pub fn empty_content(mut self) -> Self {
        self.content = Some(Map::new());
        self
    }

    /// Returns the media type declared for `content_type`, if any.
    pub fn media(&self, content_type: &str) -> Option<&MediaType> {
        self.content.as_ref().and_then(|content| content.get(content_type))
    }
}

/// A media type and its schema.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct MediaType {
    /// The schema for this media type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

impl MediaType {
    /// Creates a new media type without a schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new media type with the given schema.
    pub fn with_schema(schema: SchemaRef) -> Self {
        Self {
            schema: Some(schema),
        }
    }
}

/// Deserializes a responses map whose keys may be bare integers in YAML (`200:`) or
/// strings (`'200'`, `default`).
pub(crate) fn deserialize_responses<'de, D>(
    deserializer: D,
) -> Result<Map<String, Response>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Map::<StatusKey, Response>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(key, response)| (key.0, response)).collect())
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct StatusKey(String);

impl<'de> serde::Deserialize<'de> for StatusKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(StatusKeyVisitor)
    }
}

struct StatusKeyVisitor;

impl serde::de::Visitor<'_> for StatusKeyVisitor {
    type Value = StatusKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a status code or `default`")
    }

    fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<StatusKey, E> {
        Ok(StatusKey(value.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, value: String) -> Result<StatusKey, E> {
        Ok(StatusKey(value))
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<StatusKey, E> {
        Ok(StatusKey(value.to_string()))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<StatusKey, E> {
        Ok(StatusKey(value.to_string()))
    }
}
