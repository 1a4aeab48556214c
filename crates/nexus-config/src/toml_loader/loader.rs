//! TOML config loading: read from a path or the platform default,
//! creating a commented default file on first run.

use std::path::{Path, PathBuf};

use nexus_common::ConfigError;
use tracing::{info, warn};

use crate::schema::NexusConfig;
use crate::validation;

use super::template::default_config_toml;

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a
/// warning is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<NexusConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.to_path_buf()))?;

    let config: NexusConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/nexus/config.toml`
/// On Linux: `~/.config/nexus/config.toml`
///
/// If the file does not exist, creates a default config file and
/// returns defaults.
pub fn load_default() -> Result<NexusConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(NexusConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("nexus").join("config.toml"))
        .ok_or_else(|| ConfigError::ParseError("no config directory on this platform".into()))
}

/// Write the commented default config template to `path`, creating
/// parent directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("failed to create {}: {e}", parent.display()))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!("failed to write {}: {e}", path.display()))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
