//! API description types.
//!
//! This module provides the types for the subset of an OpenAPI 3 document consumed by
//! the help pipeline and the request dispatcher. Anything the pipeline does not read is
//! ignored during deserialization.

pub mod info;
pub mod map;
pub mod operation;
pub mod parameter;
pub mod path;
pub mod request_body;
pub mod response;
pub mod schema;
pub mod security;
pub mod tag;

pub use self::{
    info::Info,
    map::Map,
    operation::Operation,
    parameter::{Parameter, ParameterIn, ParameterSchema},
    path::{Method, PathItem},
    request_body::RequestBody,
    response::{MediaType, Response},
    schema::SchemaRef,
    security::SecurityRequirement,
    tag::Tag,
};

/// The root object of an API description document.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct OpenApi {
    /// The OpenAPI version string (e.g. "3.0.3").
    #[serde(default)]
    pub openapi: String,

    /// Metadata about the API.
    #[serde(default)]
    pub info: Info,

    /// The operations of the API, keyed by path template.
    #[serde(default)]
    pub paths: Map<String, PathItem>,

    /// Catalog-wide security requirements, inherited by operations without their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,

    /// Tag declarations with their descriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl OpenApi {
    /// Creates a new document with the given info and no paths.
    pub fn new(info: Info) -> Self {
        Self {
            openapi: "3.0.3".to_string(),
            info,
            ..Self::default()
        }
    }

    /// Adds an operation under `path` for `method`, creating the path item if needed.
    pub fn operation(mut self, path: impl Into<String>, method: Method, operation: Operation) -> Self {
        let item = self.paths.entry(path.into()).or_default();
        item.set(method, operation);
        self
    }

    /// Sets the catalog-wide security requirements.
    pub fn security(mut self, security: Vec<SecurityRequirement>) -> Self {
        self.security = security;
        self
    }

    /// Sets the tag declarations.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Looks up the description declared for a tag, if any.
    pub fn tag_description(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.name == name)
            .and_then(|tag| tag.description.as_deref())
    }
}
