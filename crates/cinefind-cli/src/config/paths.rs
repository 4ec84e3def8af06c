//! Config file path resolution.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Resolves the config file path.
///
/// - If `file` is `Some`, returns it unchanged.
/// - Otherwise returns `~/.config/cinefind/config.toml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined (when `file` is `None`).
pub fn resolve_config_path(file: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(f) = file {
        return Ok(f.clone());
    }

    let home = std::env::var("HOME").context("HOME environment variable is not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("cinefind")
        .join("config.toml"))
}
