//! Configuration file support for pnpm-catalog.
//!
//! Provides YAML-based configuration through `pnpm-catalog.config.yml`
//! files in the workspace root, including file loading and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use pnpm_catalog::shared::Result;

pub const CONFIG_FILENAME: &str = "pnpm-catalog.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Replaces the built-in ignore list when present
    pub ignore_packages: Option<Vec<String>>,
    pub pnpm_command: Option<String>,
    pub command_timeout_secs: Option<u64>,
    pub check: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in the workspace root. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref ignore_packages) = config.ignore_packages {
        for (i, name) in ignore_packages.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: ignore_packages[{}] must not be empty.\n\n\
                     💡 Hint: List package names or wildcard patterns (e.g., \"@types/*\").",
                    i
                );
            }
        }
    }

    if config.command_timeout_secs == Some(0) {
        bail!(
            "Invalid config: command_timeout_secs must be greater than 0.\n\n\
             💡 Hint: pnpm installs in large workspaces can take minutes; the default is 300."
        );
    }

    if let Some(ref pnpm_command) = config.pnpm_command {
        if pnpm_command.trim().is_empty() {
            bail!(
                "Invalid config: pnpm_command must not be empty.\n\n\
                 💡 Hint: Remove the field to use `pnpm` from PATH."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
