//! Formatting of help records for `-h` (structured JSON) and `-hh` (aligned text).

use super::{
    ErrorExamples, HelpRecord,
    preview::{DEFAULT_MAX_DEPTH, limit_depth},
};
use crate::{error::RenderError, value::Value};

/// Closing hint of the text help.
const HELP_FLAGS_HINT: &str = "Use -h for JSON help, -hh for this human-readable help.";

/// Note shown under the description of operations that require authentication.
const AUTH_NOTE: &str = "NOTE: This command requires authentication with the API.";

/// The JSON document printed for `-h`.
///
/// Fields are declared in lexical order so the serialized keys are sorted regardless of
/// serializer settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StructuredHelp {
    pub arguments: ArgumentsSection,
    pub authentication_required: bool,
    pub description: String,
    pub error_examples: ErrorExamples,
    pub expected_input_schema: Value,
    pub expected_output_schema: Value,
    pub usage: String,
}

/// The `arguments` field: the argument list, or the string `"None"` when empty.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ArgumentsSection {
    Listed(Vec<ArgumentDetail>),
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ArgumentDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    pub description: String,
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub type_label: String,
}

/// Builds the structured form of a record, with shape previews limited to
/// [`DEFAULT_MAX_DEPTH`].
pub fn structured_help(record: &HelpRecord) -> StructuredHelp {
    let arguments = if record.arguments.is_empty() {
        ArgumentsSection::Empty("None")
    } else {
        ArgumentsSection::Listed(
            record
                .arguments
                .iter()
                .map(|arg| ArgumentDetail {
                    default: arg.default.clone(),
                    description: arg.description.clone(),
                    name: arg.name.clone(),
                    required: arg.required,
                    type_label: arg.type_label.clone(),
                })
                .collect(),
        )
    };

    StructuredHelp {
        arguments,
        authentication_required: record.auth_required,
        description: record.description.clone(),
        error_examples: record.error_examples.clone(),
        expected_input_schema: limit_depth(&record.input_shape, 1, DEFAULT_MAX_DEPTH),
        expected_output_schema: limit_depth(&record.output_shape, 1, DEFAULT_MAX_DEPTH),
        usage: record.usage.clone(),
    }
}

/// Renders a record as pretty-printed JSON (two-space indent).
pub fn render_json(record: &HelpRecord) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(&structured_help(record))?)
}

/// Renders a record as aligned text for a terminal, ending with a newline.
pub fn render_text(record: &HelpRecord) -> String {
    let mut lines = vec![
        format!("Usage: {}", record.usage),
        String::new(),
        "Description:".to_string(),
        format!("  {}", record.description),
    ];
    if record.auth_required {
        lines.push(format!("  {AUTH_NOTE}"));
    }

    if !record.arguments.is_empty() {
        let name_width = record
            .arguments
            .iter()
            .map(|arg| arg.name.chars().count())
            .max()
            .unwrap_or_default();
        // Two extra columns for the angle brackets around the type.
        let type_width = record
            .arguments
            .iter()
            .map(|arg| arg.type_label.chars().count())
            .max()
            .unwrap_or_default()
            + 2;

        lines.push(String::new());
        lines.push("Arguments:".to_string());
        for arg in &record.arguments {
            let mut line = format!(
                "  --{:<name_width$} {:<type_width$}",
                arg.name,
                format!("<{}>", arg.type_label),
            );
            let trailing = [
                Some(arg.description.clone()).filter(|d| !d.is_empty()),
                arg.required.then(|| "(required)".to_string()),
                arg.default.as_ref().map(|d| format!("(default: {d})")),
            ];
            for part in trailing.into_iter().flatten() {
                line.push(' ');
                line.push_str(&part);
            }
            lines.push(line.trim_end().to_string());
        }
    }

    lines.push(String::new());
    lines.push(HELP_FLAGS_HINT.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
