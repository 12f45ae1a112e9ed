use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BeaconError;

use super::types::Config;

/// Platform config file location, e.g. `~/.config/beacon/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("beacon").join("config.toml"))
}

/// Load the user config, falling back to defaults when the file is
/// missing. A malformed file also falls back, with a warning, rather than
/// refusing to start.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring config {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Load and parse one specific config file.
pub fn load_from(path: &Path) -> Result<Config, BeaconError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
