//! CLI configuration handling.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Default config file name (lives in the working directory)
pub const CONFIG_FILE_NAME: &str = "dburl.toml";

/// dburl CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration
    pub output: OutputConfig,

    /// Named connection URLs
    pub urls: IndexMap<String, String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `dburl.toml` from a directory, or defaults if it does not exist
    pub fn load_or_default(dir: &Path) -> CliResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the config given on the command line, or fall back to the working directory
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::load(path),
            None => Self::load_or_default(&std::env::current_dir()?),
        }
    }

    /// Look up a named URL
    pub fn url(&self, name: &str) -> CliResult<&str> {
        self.urls
            .get(name)
            .map(|s| s.as_str())
            .ok_or_else(|| CliError::Config(format!("No URL named '{}' in [urls]", name)))
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Print query properties in text output
    pub show_properties: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_properties: true,
        }
    }
}
