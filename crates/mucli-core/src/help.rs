//! Help records and the pipeline that builds and renders them.
//!
//! The pipeline runs in four stages, each a pure function:
//!
//! 1. [`schema_label`] turns a schema into a short type label (`SeriesModelV1`, `[]string`).
//! 2. [`build_help_record`] derives the [`HelpRecord`] of one operation.
//! 3. [`generate_catalog`] builds a record for every eligible operation of a document,
//!    grouped by subprogram and ordered by operation id.
//! 4. [`render_json`] and [`render_text`] format a record for `-h` and `-hh`.

use std::collections::BTreeMap;

use serde::ser::SerializeMap as _;

use crate::value::Value;

mod builder;
mod catalog;
mod preview;
mod render;
mod schema_label;

pub use self::{
    builder::{HelpContext, build_help_record, requires_auth},
    catalog::{
        Catalog, CatalogEntry, CatalogOptions, DEFAULT_PROGRAM_NAME, SkipReason, admit_operation,
        generate_catalog,
    },
    preview::{DEFAULT_MAX_DEPTH, limit_depth},
    render::{
        ArgumentDetail, ArgumentsSection, StructuredHelp, render_json, render_text,
        structured_help,
    },
    schema_label::{ANY_SCHEMA_LABEL, OBJECT_SCHEMA_LABEL, schema_label},
};

/// Schema name of the generic API response envelope.
///
/// Used as the output shape when an operation declares no known success status, and
/// never appended to error examples since every error shares it.
pub const DEFAULT_RESPONSE_SCHEMA: &str = "ApiResponseV1";

/// Success status codes, in the order they are looked up for the output shape.
pub const SUCCESS_STATUS_PRIORITY: [&str; 4] = ["200", "201", "202", "204"];

/// Suffix appended to the usage line of operations that require authentication.
pub const AUTH_MARKER: &str = " [REQUIRES AUTH]";

/// Key and message of the fallback error example.
pub const GENERIC_ERROR_KEY: &str = "Generic";
pub const GENERIC_ERROR_MESSAGE: &str = "Standard API errors.";

/// Renderer-ready help for one operation.
///
/// Built once by [`build_help_record`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HelpRecord {
    /// Usage line, e.g. `mucli series retrieveSeries --id <integer(int64)>`.
    pub usage: String,

    /// The summary of the operation.
    pub description: String,

    /// One entry per parameter, in declaration order.
    pub arguments: Vec<ArgHelp>,

    /// A terse description of the expected input, e.g. `Path/Query Parameters`.
    pub input_shape: Value,

    /// A terse description of the success output, e.g. `Schema (on 200): <SeriesModelV1:L1>`.
    pub output_shape: Value,

    /// Error messages keyed by status code.
    pub error_examples: ErrorExamples,

    /// Whether the operation must be called with credentials.
    pub auth_required: bool,
}

/// Help for one command-line argument.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ArgHelp {
    /// The parameter name as declared (underscores intact).
    pub name: String,

    /// The type label, `type` or `type(format)`.
    #[serde(rename = "type")]
    pub type_label: String,

    pub required: bool,

    pub description: String,

    /// The stringified default value, when one is declared and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Error messages of an operation.
///
/// Both variants serialize as a JSON object; keys of [`ErrorExamples::ByStatus`] come out
/// in ascending lexical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorExamples {
    /// One message per 4xx/5xx status code.
    ByStatus(BTreeMap<String, String>),
    /// No error responses were declared: `{"Generic": "Standard API errors."}`.
    Generic,
}

impl ErrorExamples {
    /// The examples as a map, expanding [`ErrorExamples::Generic`] to its single entry.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        match self {
            ErrorExamples::ByStatus(map) => map.clone(),
            ErrorExamples::Generic => BTreeMap::from([(
                GENERIC_ERROR_KEY.to_string(),
                GENERIC_ERROR_MESSAGE.to_string(),
            )]),
        }
    }
}

impl serde::Serialize for ErrorExamples {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            ErrorExamples::ByStatus(map) => serde::Serialize::serialize(map, serializer),
            ErrorExamples::Generic => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(GENERIC_ERROR_KEY, GENERIC_ERROR_MESSAGE)?;
                map.end()
            }
        }
    }
}
