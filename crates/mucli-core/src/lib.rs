//! # mucli-core
//!
//! Core types and the help-content pipeline for mucli.
//!
//! This crate models the subset of an OpenAPI 3 document that the command-line client
//! needs, and turns every tagged operation of that document into a [`HelpRecord`]: the
//! usage line, argument table, input/output shape summaries and error examples shown by
//! the `-h` (JSON) and `-hh` (text) help modes.

pub mod emit;
pub mod error;
pub mod help;
pub mod loader;
pub mod openapi;
pub mod value;

// Re-export main types at the crate root for convenience
pub use emit::{Emitter, JsonEmitter, RustSourceEmitter, clean_generated, write_catalog};
pub use error::{EmitError, LoadError, RenderError};
pub use help::{
    ArgHelp, Catalog, CatalogEntry, CatalogOptions, ErrorExamples, HelpRecord, StructuredHelp,
    build_help_record, generate_catalog, limit_depth, render_json, render_text, schema_label,
};
pub use loader::{DocumentFormat, load_document, parse_document};
pub use openapi::{
    Info, Map, MediaType, Method, OpenApi, Operation, Parameter, ParameterIn,
    ParameterSchema, PathItem, RequestBody, Response, SchemaRef, SecurityRequirement, Tag,
};
pub use value::Value;
