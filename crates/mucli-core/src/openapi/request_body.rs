//! Request body entity.

use super::{map::Map, response::MediaType};

/// Describes the body accepted by an operation.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct RequestBody {
    /// A description of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the body is required.
    #[serde(default)]
    pub required: bool,

    /// The accepted media types and their schemas.
    ///
    /// `None` when the body declares no `content` at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, MediaType>>,
}

impl RequestBody {
    /// Creates a new optional request body without a content map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the body is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Adds a media type.
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
}
