//! Emitters that turn a help catalog into generated files.
//!
//! The catalog is plain data; an [`Emitter`] decides the target representation. Two are
//! provided: [`JsonEmitter`] writes one JSON document per subprogram and
//! [`RustSourceEmitter`] writes a Rust module with one constructor function per command.

use std::{
    fmt::{self, Write as _},
    path::{Path, PathBuf},
};

use crate::{
    error::EmitError,
    help::{ArgHelp, Catalog, CatalogEntry, ErrorExamples, HelpRecord},
    value::Value,
};

/// File name suffix of [`JsonEmitter`] output.
pub const JSON_SUFFIX: &str = "_help.json";

/// File name suffix of [`RustSourceEmitter`] output.
pub const RUST_SUFFIX: &str = "_generated_help.rs";

/// Header line of every generated Rust module.
pub const GENERATED_HEADER: &str = "// Code generated by mucli generate; DO NOT EDIT.";

/// A target representation for the entries of one subprogram.
pub trait Emitter {
    /// The file name for a subprogram, e.g. `series_help.json`.
    fn file_name(&self, subprogram: &str) -> String;

    /// Renders the entries of one subprogram into file contents.
    fn emit(&self, subprogram: &str, entries: &[CatalogEntry]) -> Result<String, EmitError>;
}

/// Emits a pretty-printed JSON array of catalog entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn file_name(&self, subprogram: &str) -> String {
        format!("{subprogram}{JSON_SUFFIX}")
    }

    fn emit(&self, subprogram: &str, entries: &[CatalogEntry]) -> Result<String, EmitError> {
        let mut text =
            serde_json::to_string_pretty(entries).map_err(|source| EmitError::Serialize {
                subprogram: subprogram.to_string(),
                source,
            })?;
        text.push('\n');
        Ok(text)
    }
}

/// Emits a Rust module with one `pub fn help_<operation_id>() -> HelpRecord` per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSourceEmitter;

impl Emitter for RustSourceEmitter {
    fn file_name(&self, subprogram: &str) -> String {
        format!("{}{RUST_SUFFIX}", to_snake_case(subprogram))
    }

    fn emit(&self, subprogram: &str, entries: &[CatalogEntry]) -> Result<String, EmitError> {
        let mut out = String::new();
        write_module(&mut out, subprogram, entries).map_err(|source| EmitError::Format {
            subprogram: subprogram.to_string(),
            source,
        })?;
        Ok(out)
    }
}

fn write_module(out: &mut String, subprogram: &str, entries: &[CatalogEntry]) -> fmt::Result {
    writeln!(out, "{GENERATED_HEADER}")?;
    writeln!(out, "//! Help records of the `{subprogram}` subprogram.")?;
    writeln!(out)?;
    writeln!(out, "#![allow(unused_imports)]")?;
    writeln!(out)?;
    writeln!(out, "use std::collections::BTreeMap;")?;
    writeln!(out)?;
    writeln!(out, "use mucli_core::{{ArgHelp, ErrorExamples, HelpRecord, Value}};")?;

    for entry in entries {
        writeln!(out)?;
        write_help_fn(out, entry)?;
    }
    Ok(())
}

fn write_help_fn(out: &mut String, entry: &CatalogEntry) -> fmt::Result {
    let HelpRecord {
        usage,
        description,
        arguments,
        input_shape,
        output_shape,
        error_examples,
        auth_required,
    } = &entry.help;

    writeln!(out, "/// `{} {}`", entry.method, entry.path)?;
    writeln!(
        out,
        "#[allow(dead_code)]\npub fn help_{}() -> HelpRecord {{",
        to_snake_case(&entry.operation_id)
    )?;
    writeln!(out, "    HelpRecord {{")?;
    writeln!(out, "        usage: {usage:?}.to_string(),")?;
    writeln!(out, "        description: {description:?}.to_string(),")?;
    if arguments.is_empty() {
        writeln!(out, "        arguments: Vec::new(),")?;
    } else {
        writeln!(out, "        arguments: vec![")?;
        for arg in arguments {
            write_arg(out, arg)?;
        }
        writeln!(out, "        ],")?;
    }
    writeln!(out, "        input_shape: {},", value_literal(input_shape))?;
    writeln!(out, "        output_shape: {},", value_literal(output_shape))?;
    match error_examples {
        ErrorExamples::Generic => {
            writeln!(out, "        error_examples: ErrorExamples::Generic,")?;
        }
        ErrorExamples::ByStatus(map) => {
            writeln!(out, "        error_examples: ErrorExamples::ByStatus(BTreeMap::from([")?;
            for (status, message) in map {
                writeln!(
                    out,
                    "            ({status:?}.to_string(), {message:?}.to_string()),"
                )?;
            }
            writeln!(out, "        ])),")?;
        }
    }
    writeln!(out, "        auth_required: {auth_required},")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}

fn write_arg(out: &mut String, arg: &ArgHelp) -> fmt::Result {
    let default = match &arg.default {
        Some(default) => format!("Some({default:?}.to_string())"),
        None => "None".to_string(),
    };
    writeln!(out, "            ArgHelp {{")?;
    writeln!(out, "                name: {:?}.to_string(),", arg.name)?;
    writeln!(out, "                type_label: {:?}.to_string(),", arg.type_label)?;
    writeln!(out, "                required: {},", arg.required)?;
    writeln!(out, "                description: {:?}.to_string(),", arg.description)?;
    writeln!(out, "                default: {default},")?;
    writeln!(out, "            }},")
}

/// A Rust expression evaluating to `value`.
fn value_literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("Value::String({s:?}.to_string())"),
        Value::Null => "Value::Null".to_string(),
        Value::Bool(b) => format!("Value::Bool({b})"),
        Value::Number(_) | Value::Sequence(_) | Value::Mapping(_) => {
            let json = serde_json::Value::from(value.clone()).to_string();
            format!("Value::from(serde_json::from_str::<serde_json::Value>({json:?}).unwrap_or_default())")
        }
    }
}

/// Converts an operation id or tag to snake case: `retrieveSeriesRSS` gives
/// `retrieve_series_rss`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Writes one file per non-empty subprogram to `out_dir/<subprogram>/<file name>`.
///
/// Returns the written paths, in subprogram order.
pub fn write_catalog(
    catalog: &Catalog,
    emitter: &dyn Emitter,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, EmitError> {
    let mut written = Vec::new();
    for (subprogram, entries) in catalog.groups() {
        if entries.is_empty() {
            tracing::info!(subprogram, "no operations to generate help for, skipping");
            continue;
        }

        let dir = out_dir.join(subprogram);
        std::fs::create_dir_all(&dir).map_err(|source| EmitError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(emitter.file_name(subprogram));
        let contents = emitter.emit(subprogram, entries)?;
        std::fs::write(&path, contents).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(subprogram, path = %path.display(), "generated help");
        written.push(path);
    }
    Ok(written)
}

/// Removes previously generated files from `out_dir/<subprogram>/` for each subprogram.
///
/// Only files ending in [`JSON_SUFFIX`] or [`RUST_SUFFIX`] are touched; missing
/// directories are skipped. Returns the removed paths.
pub fn clean_generated<'a>(
    out_dir: &Path,
    subprograms: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<PathBuf>, EmitError> {
    let mut removed = Vec::new();
    for subprogram in subprograms {
        let dir = out_dir.join(subprogram);
        let listing = match std::fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "nothing to clean");
                continue;
            }
        };

        for dir_entry in listing.flatten() {
            let path = dir_entry.path();
            let is_generated = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(JSON_SUFFIX) || name.ends_with(RUST_SUFFIX));
            if !is_generated {
                continue;
            }

            std::fs::remove_file(&path).map_err(|source| EmitError::Remove {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "removed generated help");
            removed.push(path);
        }
    }
    Ok(removed)
}
