//! Layered configuration: defaults, then the config file, then environment and flags.
//!
//! Environment variables reach [`Overrides`] through clap's `env` attributes, so the
//! last two layers arrive together.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.mangaupdates.com/v1/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Effective settings of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Bearer token for operations that require authentication.
    pub token: Option<String>,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line or through `MUCLI_*` variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// `config.toml` in the platform configuration directory, e.g.
/// `~/.config/mucli/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mucli").map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Resolves the configuration.
    ///
    /// An explicit `path` must exist. The default path is read only when present.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => read_file(path)?,
            None => match default_config_path().filter(|path| path.is_file()) {
                Some(path) => read_file(&path)?,
                None => FileConfig::default(),
            },
        };
        Self::from_layers(file, overrides)
    }

    /// Applies `file`, then `overrides`, on top of the defaults.
    pub fn from_layers(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let defaults = Config::default();
        let base_url = overrides
            .base_url
            .or(file.base_url)
            .unwrap_or(defaults.base_url);
        if base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        let token = overrides
            .token
            .or(file.token)
            .filter(|token| !token.is_empty());

        Ok(Self {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(file)
}
