//! Error types for the boundaries of the help pipeline.
//!
//! Building help records never fails. Errors only arise when reading the API description,
//! when serializing structured help, and when writing generated catalog files.

use std::{io, path::PathBuf};

/// Failure to read or parse an API description document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read API description {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse YAML API description")]
    Yaml(#[from] serde_norway::Error),

    #[error("failed to parse JSON API description")]
    Json(#[from] serde_json::Error),
}

/// Failure to render a help record.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize structured help")]
    Serialize(#[from] serde_json::Error),
}

/// Failure to emit or clean generated catalog files.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to serialize generated help for subprogram '{subprogram}'")]
    Serialize {
        subprogram: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to format generated source for subprogram '{subprogram}'")]
    Format {
        subprogram: String,
        #[source]
        source: std::fmt::Error,
    },

    #[error("failed to write generated help file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove generated help file {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
