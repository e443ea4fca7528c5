//! Grouping of every operation of a document into per-subprogram help catalogs.

use std::collections::{BTreeMap, HashSet};

use super::{
    HelpRecord,
    builder::{HelpContext, build_help_record},
};
use crate::openapi::{Method, OpenApi, Operation};

/// Program name used in usage lines unless configured otherwise.
pub const DEFAULT_PROGRAM_NAME: &str = "mucli";

/// Options for [`generate_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// The program name at the start of every usage line.
    pub program_name: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }
}

/// Why an operation was left out of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The operation has no (or an empty) operation id, so it has no command name.
    MissingOperationId,
    /// The operation has no tags (or an empty first tag), so it has no subprogram.
    MissingTag,
    /// Another operation already claimed the same operation id.
    DuplicateOperationId,
}

/// Admission policy: an operation joins the catalog under its first tag, with its
/// operation id as command name. Further tags are ignored.
///
/// Returns `(operation_id, subprogram)` for admitted operations.
pub fn admit_operation(operation: &Operation) -> Result<(&str, &str), SkipReason> {
    let operation_id = operation
        .operation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(SkipReason::MissingOperationId)?;
    let subprogram = operation
        .primary_tag()
        .filter(|tag| !tag.is_empty())
        .ok_or(SkipReason::MissingTag)?;
    Ok((operation_id, subprogram))
}

/// One command of the catalog.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CatalogEntry {
    /// The command name.
    pub operation_id: String,
    pub method: Method,
    /// The path template, e.g. `/series/{id}`.
    pub path: String,
    /// The operation the entry was built from; needed to dispatch requests.
    #[serde(skip)]
    pub operation: Operation,
    pub help: HelpRecord,
}

/// Help records of a whole document, grouped by subprogram.
///
/// Subprograms are ordered by name and entries within a subprogram by operation id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    groups: BTreeMap<String, Vec<CatalogEntry>>,
    descriptions: BTreeMap<String, String>,
}

impl Catalog {
    /// Iterates `(subprogram, entries)` pairs in subprogram order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[CatalogEntry])> + '_ {
        self.groups
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Iterates the subprogram names.
    pub fn subprograms(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    /// The entries of one subprogram.
    pub fn group(&self, subprogram: &str) -> Option<&[CatalogEntry]> {
        self.groups.get(subprogram).map(Vec::as_slice)
    }

    /// Looks up a command of a subprogram.
    pub fn find(&self, subprogram: &str, command: &str) -> Option<&CatalogEntry> {
        self.group(subprogram)?
            .iter()
            .find(|entry| entry.operation_id == command)
    }

    /// The description of a subprogram, taken from the document's tag declarations.
    pub fn description(&self, subprogram: &str) -> Option<&str> {
        self.descriptions.get(subprogram).map(String::as_str)
    }

    /// Total number of commands over all subprograms.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Builds the help catalog of a document.
///
/// Operations rejected by [`admit_operation`] are skipped silently (logged at debug
/// level). When two operations share an id, the first one in path order (then
/// [`Method::ALL`] order) is kept.
pub fn generate_catalog(document: &OpenApi, options: &CatalogOptions) -> Catalog {
    let mut groups: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
    let mut seen = HashSet::new();

    for (path, item) in &document.paths {
        for (method, operation) in item.operations() {
            let (operation_id, subprogram) = match admit_operation(operation) {
                Ok(admitted) => admitted,
                Err(reason) => {
                    tracing::debug!(%path, %method, ?reason, "skipping operation");
                    continue;
                }
            };
            if !seen.insert(operation_id) {
                tracing::warn!(
                    %path,
                    %method,
                    operation_id,
                    reason = ?SkipReason::DuplicateOperationId,
                    "skipping operation"
                );
                continue;
            }

            let context = HelpContext {
                program: &options.program_name,
                subprogram,
                default_security: &document.security,
            };
            groups
                .entry(subprogram.to_string())
                .or_default()
                .push(CatalogEntry {
                    operation_id: operation_id.to_string(),
                    method,
                    path: path.clone(),
                    operation: operation.clone(),
                    help: build_help_record(operation, &context),
                });
        }
    }

    for entries in groups.values_mut() {
        entries.sort_by(|a, b| a.operation_id.cmp(&b.operation_id));
    }

    let descriptions = groups
        .keys()
        .filter_map(|name| {
            document
                .tag_description(name)
                .map(|description| (name.clone(), description.to_string()))
        })
        .collect();

    tracing::debug!(
        subprograms = groups.len(),
        commands = groups.values().map(Vec::len).sum::<usize>(),
        "generated help catalog"
    );
    Catalog {
        groups,
        descriptions,
    }
}
