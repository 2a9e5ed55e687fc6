//! Configuration loading
//!
//! Reads `~/.config/suggestbox/config.toml` (or an explicit path). A missing
//! file yields defaults; a malformed file yields defaults plus a warning so
//! the host keeps running.

mod types;

use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_CLEAR_DELAY_MS, DEFAULT_MAX_HEIGHT, DropdownConfig};

/// Outcome of loading the configuration file
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when a file existed but could not be used
    pub warning: Option<String>,
}

const CONFIG_DIR: &str = "suggestbox";
const CONFIG_FILE: &str = "config.toml";

/// Default config location, `~/.config/suggestbox/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => return ConfigResult::default(),
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return ConfigResult::default();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            return with_warning(format!("Failed to read {}: {}", path.display(), e));
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => with_warning(format!("Invalid config {}: {}", path.display(), e)),
    }
}

fn with_warning(message: String) -> ConfigResult {
    log::warn!("{}", message);
    ConfigResult {
        config: Config::default(),
        warning: Some(message),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
