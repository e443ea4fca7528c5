//! Parameter entity for operation inputs.

use crate::value::Value;

/// Describes a single operation parameter.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// The name of the parameter.
    ///
    /// Empty for unresolved `$ref` entries, which only carry the reference.
    #[serde(default)]
    pub name: String,

    /// The location of the parameter.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub in_: Option<ParameterIn>,

    /// A description of the parameter.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,

    /// The type of the parameter value.
    #[serde(default)]
    pub schema: ParameterSchema,
}

impl Parameter {
    /// Creates a new optional parameter with the given name and location.
    pub fn new(name: impl Into<String>, in_: ParameterIn) -> Self {
        Self {
            name: name.into(),
            in_: Some(in_),
            description: String::new(),
            required: false,
            schema: ParameterSchema::default(),
        }
    }

    /// Creates a new required path parameter.
    pub fn new_path(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Path).required(true)
    }

    /// Creates a new optional query parameter.
    pub fn new_query(name: impl Into<String>) -> Self {
        Self::new(name, ParameterIn::Query)
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets whether the parameter is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the schema.
    pub fn schema(mut self, schema: ParameterSchema) -> Self {
        self.schema = schema;
        self
    }

    /// The command-line flag for this parameter, without the leading dashes.
    pub fn flag_name(&self) -> String {
        self.name.replace('_', "-")
    }

    /// The location of the parameter, defaulting to the query string.
    pub fn location(&self) -> ParameterIn {
        self.in_.unwrap_or(ParameterIn::Query)
    }
}

/// The location of the parameter in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a request header.
    Header,
    /// Sent as a cookie.
    Cookie,
}

/// The value type of a parameter.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ParameterSchema {
    /// The primitive type (e.g., "string", "integer").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// An optional format qualifier (e.g., "int64", "date-time").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The value used when the parameter is omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// The allowed values, when the parameter is an enumeration.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

impl ParameterSchema {
    /// Creates a new schema of the given primitive type.
    pub fn new(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// Sets the format qualifier.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the default value.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Sets the allowed values.
    pub fn enum_values(mut self, values: Vec<Value>) -> Self {
        self.enum_values = Some(values);
        self
    }

    /// The type label shown in usage lines and argument tables: `type` or `type(format)`.
    ///
    /// A missing type leaves the label empty, or just `(format)`.
    pub fn type_label(&self) -> String {
        let base = self.schema_type.as_deref().unwrap_or_default();
        match self.format.as_deref() {
            Some(format) if !format.is_empty() => format!("{base}({format})"),
            _ => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_label_with_type_and_format_joins_them() {
        assert_eq!(ParameterSchema::new("integer").format("int64").type_label(), "integer(int64)");
        assert_eq!(ParameterSchema::new("boolean").type_label(), "boolean");
    }

    #[test]
    fn type_label_without_type_is_empty_or_format_only() {
        //* Given
        let untyped = ParameterSchema::default();
        let formatted = ParameterSchema {
            format: Some("date".to_string()),
            ..ParameterSchema::default()
        };

        //* Then
        assert_eq!(untyped.type_label(), "");
        assert_eq!(formatted.type_label(), "(date)");
    }

    #[test]
    fn flag_name_replaces_underscores() {
        assert_eq!(Parameter::new_query("include_meta").flag_name(), "include-meta");
    }
}
