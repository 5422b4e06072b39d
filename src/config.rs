//! Vault root configuration.
//!
//! The vault root is resolved once per run, in order of precedence:
//! the `--vault` flag, the `LECTERN_VAULT` environment variable, then the
//! `vault_root` key in the user config file. It is then treated as
//! read-only for the duration of the batch.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable overriding the configured vault root.
pub const VAULT_ENV: &str = "LECTERN_VAULT";

/// User configuration, loaded from `config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vault_root: Option<PathBuf>,
}

/// Location of the user config file (`~/.config/lectern/config.toml` on
/// Linux), if a config directory exists on this platform.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lectern").join("config.toml"))
}

/// Load the user config file if present.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_file_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(Some(config))
}

/// Resolve the vault root from flag, environment, or config file.
pub fn resolve_vault_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    if let Ok(value) = std::env::var(VAULT_ENV) {
        if !value.is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    if let Some(config) = load_config()? {
        if let Some(root) = config.vault_root {
            return Ok(root);
        }
    }

    let config_hint = config_file_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "the lectern config file".to_string());
    bail!("No vault configured. Pass --vault <path>, set {VAULT_ENV}, or add vault_root to {config_hint}");
}
