//! Loading API description documents from disk.

use std::path::Path;

use crate::{error::LoadError, openapi::OpenApi};

/// The serialization format of an API description document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension: `.json` is JSON, anything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Parses an API description from text.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<OpenApi, LoadError> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_norway::from_str(text)?,
    };
    Ok(document)
}

/// Reads and parses the API description at `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<OpenApi, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = parse_document(&text, DocumentFormat::from_path(path))?;
    tracing::debug!(
        path = %path.display(),
        paths = document.paths.len(),
        "loaded API description"
    );
    Ok(document)
}
