//! Operation entity for API endpoints.

use super::{
    Parameter, RequestBody, Response, SecurityRequirement, map::Map,
    response::deserialize_responses,
};

/// One API endpoint: a path template combined with an HTTP method.
///
/// Operations become CLI commands. The operation id is the command name and the first
/// tag is the subprogram the command lives under.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Operation {
    /// Tags for grouping operations into subprograms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// A short summary of what the operation does.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    /// A detailed description of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A unique identifier for the operation.
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// The request body, if the operation accepts one.
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code (e.g., "200", "404", "default").
    #[serde(
        default,
        deserialize_with = "deserialize_responses",
        skip_serializing_if = "Map::is_empty"
    )]
    pub responses: Map<String, Response>,

    /// Security requirements of this operation. Empty means "inherit the catalog default".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
}

impl Operation {
    /// Creates a new operation with the given id and no tags.
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: Some(operation_id.into()),
            ..Self::default()
        }
    }

    /// Sets the tags.
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sets a single tag.
    pub fn tag(self, tag: impl Into<String>) -> Self {
        self.tags(vec![tag.into()])
    }

    /// Sets the summary.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the parameters.
    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Sets the request body.
    pub fn request_body(mut self, request_body: RequestBody) -> Self {
        self.request_body = Some(request_body);
        self
    }

    /// Adds a response for the given status code.
    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.insert(status.into(), response);
        self
    }

    /// Sets the security requirements.
    pub fn security(mut self, security: Vec<SecurityRequirement>) -> Self {
        self.security = security;
        self
    }

    /// The first declared tag, which names the subprogram of the operation.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// The parameters that can be passed as flags. Unresolved `$ref` entries carry no
    /// name and are left out.
    pub fn named_parameters(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.parameters
            .iter()
            .filter(|parameter| !parameter.name.is_empty())
    }
}
