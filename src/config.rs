//! Options for the engine and the session, loadable from YAML or JSON.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```yaml
//! engine:
//!   max_steps: 500
//! session:
//!   pretty_tables: false
//! catalog: presets.yaml
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Limits applied by the SLR engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Steps recorded before a parse is abandoned. Guards against tables
    /// whose reductions loop without consuming input.
    pub max_steps: usize,
    /// Stack entries (states and symbols) allowed before a parse is
    /// abandoned. Every step records a copy of the stack, so this bounds
    /// the size of the trace as well as its length.
    pub max_stack_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_steps: 2_000,
            max_stack_depth: 512,
        }
    }
}

/// Options for the session controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Pretty-print preset tables when filling the editable fields.
    pub pretty_tables: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pretty_tables: true,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub engine: EngineOptions,
    pub session: SessionOptions,
    /// Preset catalog file replacing the built-in examples.
    pub catalog: Option<PathBuf>,
}

impl Options {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Load a config file; the format follows the extension.
    ///
    /// A relative `catalog` path is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = FileFormat::detect(path)?;
        let text = std::fs::read_to_string(path)?;
        let mut options = match format {
            FileFormat::Yaml => Self::from_yaml_str(&text)?,
            FileFormat::Json => Self::from_json_str(&text)?,
        };

        if let (Some(catalog), Some(dir)) = (options.catalog.as_mut(), path.parent())
            && catalog.is_relative()
        {
            *catalog = dir.join(&*catalog);
        }

        tracing::debug!("Loaded options from {}", path.display());
        Ok(options)
    }
}

/// Structured file formats understood by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detect format from file extension.
    pub fn detect(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Errors while reading configuration or catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// Neither `.yaml`/`.yml` nor `.json`.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
