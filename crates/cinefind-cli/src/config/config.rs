//! `AppConfig` struct and TOML read/write.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use cinefind_api::tmdb::DEFAULT_ROW_SIZE;

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Result grid settings.
    #[serde(default)]
    pub grid: GridConfig,
}

/// TMDB API configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Response language for metadata requests (e.g. "en-US").
    #[serde(default = "default_language")]
    pub language: String,
}

/// Result grid configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridConfig {
    /// Grid width; result lists are truncated to full rows of this size.
    #[serde(default = "default_row_size")]
    pub row_size: usize,
}

/// Default response language.
fn default_language() -> String {
    String::from("en-US")
}

/// Default grid row size.
const fn default_row_size() -> usize {
    DEFAULT_ROW_SIZE
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_size: default_row_size(),
        }
    }
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
