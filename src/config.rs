//! Process-wide rendering configuration.
//!
//! A [`Config`] is stored in the runtime and read by every render. It only
//! changes how CSS text is formatted and prefixed, never which elements are
//! created or patched.
//!
//! Configs can be built in code or loaded from YAML/JSON:
//!
//! ```yaml
//! vendors: [webkit, moz]
//! auto-prefix: true
//! mode: production
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderOptions;

/// Build flavour of the running application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Pretty printed CSS, elements tagged with a readable `data-herb` name.
    #[default]
    Development,
    /// Compact CSS, per-style `data-herb` attributes omitted.
    Production,
}

/// Rendering options shared by every injection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Vendor names used for prefixing (`webkit` → `-webkit-`).
    pub vendors: Vec<String>,
    /// Prefix every declaration with every configured vendor.
    pub auto_prefix: bool,
    pub mode: Mode,
}

/// Error returned when a config cannot be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {message}")]
    Read { path: String, message: String },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config extension for {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vendors<I, S>(mut self, vendors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendors = vendors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_auto_prefix(mut self, auto_prefix: bool) -> Self {
        self.auto_prefix = auto_prefix;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    /// Options handed to the renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            vendors: self.vendors.clone(),
            auto_prefix: self.auto_prefix,
            pretty_print: self.is_development(),
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: display.clone(),
            message: e.to_string(),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("json") => Self::from_json_str(&source),
            _ => Err(ConfigError::UnsupportedFormat { path: display }),
        }
    }
}
