//! JSON-shaped values with an explicit variant per kind.
//!
//! Parameter defaults, enumerations and help previews are free-form data in the API
//! description. They are held as [`Value`] so the depth limiter and the stringification
//! of defaults can match on the kind of a value exhaustively.

use std::fmt;

use crate::openapi::Map;

/// A free-form value: the JSON data model.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl Value {
    /// A short name for the kind of this value, used in truncated previews.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Scalars render bare (`asc`, `25`, `true`); sequences and mappings render as compact
/// JSON. `Null` renders as the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Sequence(_) | Value::Mapping(_) => {
                write!(f, "{}", serde_json::Value::from(self.clone()))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Value::Number(n),
            Value::String(s) => serde_json::Value::String(s),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_scalars_renders_bare_text() {
        //* Then
        assert_eq!(Value::from("asc").to_string(), "asc");
        assert_eq!(Value::from(25_i64).to_string(), "25");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "", "null defaults render empty");
    }

    #[test]
    fn display_with_sequence_renders_compact_json() {
        //* Given
        let value = Value::Sequence(vec![Value::from("a"), Value::from(1_i64)]);

        //* Then
        assert_eq!(value.to_string(), r#"["a",1]"#);
    }

    #[test]
    fn from_json_value_with_nested_object_preserves_structure() {
        //* Given
        let json = serde_json::json!({"outer": {"inner": [1, 2]}});

        //* When
        let value = Value::from(json.clone());

        //* Then
        let Value::Mapping(outer) = &value else {
            panic!("expected a mapping");
        };
        assert!(matches!(outer.get("outer"), Some(Value::Mapping(_))));
        assert_eq!(serde_json::Value::from(value), json, "conversion should be lossless");
    }
}
