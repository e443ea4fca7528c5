//! Derivation of a [`HelpRecord`] from one operation.

use std::collections::BTreeMap;

use super::{
    AUTH_MARKER, ArgHelp, DEFAULT_RESPONSE_SCHEMA, ErrorExamples, HelpRecord,
    SUCCESS_STATUS_PRIORITY, schema_label::media_schema_label,
};
use crate::{
    openapi::{Map, MediaType, Operation, Parameter, RequestBody, Response, SecurityRequirement},
    value::Value,
};

const JSON_CONTENT_TYPE: &str = "application/json";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";
const XML_CONTENT_TYPE: &str = "application/xml";
const NO_CONTENT_STATUS: &str = "204";

/// Where an operation sits in the command tree, and the catalog-wide defaults it inherits.
#[derive(Debug, Clone, Copy)]
pub struct HelpContext<'a> {
    /// The program name at the start of every usage line.
    pub program: &'a str,
    /// The subprogram (first tag) the operation is exposed under.
    pub subprogram: &'a str,
    /// The catalog-wide security requirements.
    pub default_security: &'a [SecurityRequirement],
}

/// Whether an operation requires authentication.
///
/// True when the operation declares its own requirements, or declares none while the
/// catalog default is non-empty.
pub fn requires_auth(
    operation_security: &[SecurityRequirement],
    default_security: &[SecurityRequirement],
) -> bool {
    !operation_security.is_empty() || !default_security.is_empty()
}

/// Builds the help record of `operation`.
///
/// Never fails: missing or partial descriptions degrade to fallback text.
pub fn build_help_record(operation: &Operation, context: &HelpContext<'_>) -> HelpRecord {
    let operation_id = operation.operation_id.as_deref().unwrap_or_default();
    let auth_required = requires_auth(&operation.security, context.default_security);
    let parameters: Vec<&Parameter> = operation.named_parameters().collect();
    let arguments: Vec<ArgHelp> = parameters.iter().copied().map(argument_help).collect();

    HelpRecord {
        usage: usage_line(context, operation_id, &parameters, auth_required),
        description: operation.summary.clone(),
        input_shape: Value::String(input_shape(
            operation.request_body.as_ref(),
            !arguments.is_empty(),
        )),
        output_shape: Value::String(output_shape(&operation.responses)),
        error_examples: error_examples(&operation.responses),
        arguments,
        auth_required,
    }
}

fn usage_line(
    context: &HelpContext<'_>,
    operation_id: &str,
    parameters: &[&Parameter],
    auth_required: bool,
) -> String {
    let mut parts = vec![
        context.program.to_string(),
        context.subprogram.to_string(),
        operation_id.to_string(),
    ];
    parts.extend(parameters.iter().map(|param| {
        let token = format!("--{} <{}>", param.flag_name(), param.schema.type_label());
        if param.required {
            token
        } else {
            format!("[{token}]")
        }
    }));

    let mut usage = parts.join(" ");
    if auth_required {
        usage.push_str(AUTH_MARKER);
    }
    usage
}

fn argument_help(param: &Parameter) -> ArgHelp {
    ArgHelp {
        name: param.name.clone(),
        type_label: param.schema.type_label(),
        required: param.required,
        description: param.description.clone(),
        default: param
            .schema
            .default
            .as_ref()
            .map(Value::to_string)
            .filter(|default| !default.is_empty()),
    }
}

fn input_shape(body: Option<&RequestBody>, has_parameters: bool) -> String {
    let Some((body, content)) =
        body.and_then(|body| body.content.as_ref().map(|content| (body, content)))
    else {
        return if has_parameters {
            "Path/Query Parameters".to_string()
        } else {
            "None".to_string()
        };
    };

    let summary = if let Some(media) = content.get(JSON_CONTENT_TYPE) {
        format!("Request Body Schema: <{}:L1>", media_schema_label(media))
    } else if content.contains_key(MULTIPART_CONTENT_TYPE) {
        "Request Body: Multipart Form Data".to_string()
    } else {
        "Request Body: Present".to_string()
    };

    if body.required {
        format!("{summary} (required)")
    } else {
        summary
    }
}

fn output_shape(responses: &Map<String, Response>) -> String {
    let success = SUCCESS_STATUS_PRIORITY
        .iter()
        .find_map(|status| responses.get(*status).map(|response| (*status, response)));
    let Some((status, response)) = success else {
        return format!(
            "Schema: <{DEFAULT_RESPONSE_SCHEMA}:L1> (Default success, or specific success code)"
        );
    };

    match &response.content {
        None if status == NO_CONTENT_STATUS => format!("No Content (on {status})"),
        None => format!("Success Response (on {status}, no content defined)"),
        Some(content) => content_summary(status, content),
    }
}

fn content_summary(status: &str, content: &Map<String, MediaType>) -> String {
    if let Some(media) = content.get(JSON_CONTENT_TYPE) {
        return format!("Schema (on {status}): <{}:L1>", media_schema_label(media));
    }
    if content.contains_key(XML_CONTENT_TYPE) {
        return format!("XML Output (on {status})");
    }
    // Lexically smallest content type, independent of map ordering.
    if let Some(content_type) = content.keys().min() {
        return format!("Output (on {status}): {content_type}");
    }

    if status == NO_CONTENT_STATUS {
        format!("No Content (on {status})")
    } else {
        format!("Success Response (on {status}, content type unspecified or empty)")
    }
}

fn error_examples(responses: &Map<String, Response>) -> ErrorExamples {
    let examples: BTreeMap<String, String> = responses
        .iter()
        .filter(|(status, _)| status.starts_with('4') || status.starts_with('5'))
        .map(|(status, response)| (status.clone(), error_message(response)))
        .collect();

    if examples.is_empty() {
        ErrorExamples::Generic
    } else {
        ErrorExamples::ByStatus(examples)
    }
}

fn error_message(response: &Response) -> String {
    match response.media(JSON_CONTENT_TYPE).map(media_schema_label) {
        Some(schema) if schema != DEFAULT_RESPONSE_SCHEMA => {
            format!("{} (Schema: <{schema}:L1>)", response.description)
        }
        _ => response.description.clone(),
    }
}
