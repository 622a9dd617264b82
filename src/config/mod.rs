pub mod schema;

pub use schema::ToolsConfig;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Default home directory (~/.attraction-tools).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".attraction-tools"))
        .unwrap_or_else(|| PathBuf::from(".attraction-tools"))
}

/// Default config file location inside the home directory.
pub fn default_config_path() -> PathBuf {
    default_home_dir().join("config.toml")
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<ToolsConfig> {
    if path.exists() {
        let contents = std::fs::read_to_string(path).context("Failed to read config file")?;
        let config: ToolsConfig =
            toml::from_str(&contents).context("Failed to parse config (TOML)")?;
        Ok(config)
    } else {
        Ok(ToolsConfig::default())
    }
}

/// Save config to the given path (TOML format).
///
/// The file starts with a comment naming the environment variable the API
/// key is read from, so a fresh file never needs the key written into it.
pub fn save_config(config: &ToolsConfig, path: &Path) -> Result<()> {
    let body = toml::to_string_pretty(config).context("Failed to serialize config")?;
    let header = format!(
        "# attraction-tools configuration\n# The API key is read from ${} before `api_key` below.\n\n",
        config.api_key_env
    );
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, header + &body)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Write a default config file, refusing to replace one unless `overwrite`.
pub fn init_config(path: &Path, overwrite: bool) -> Result<ToolsConfig> {
    if path.exists() && !overwrite {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    let config = ToolsConfig::default();
    save_config(&config, path)?;
    info!("Wrote default config to {}", path.display());
    Ok(config)
}
