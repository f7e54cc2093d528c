// src/config.rs
// Loads configuration from ~/.config/charcount/config.toml

mod types;

pub use types::{Config, CounterConfig, DisplayConfig, EditorConfig};

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

/// Result of loading configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from the default location.
#[must_use]
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from `path`.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// malformed one yields defaults plus a warning. Reporting the warning is
/// left to the caller.
#[must_use]
pub fn load_config_from(path: &Path) -> ConfigResult {
    debug!("Loading config from {}", path.display());

    if !path.exists() {
        debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config {}: {e}", path.display())),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            debug!("Config parsed successfully: {config:?}");
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config {}: {e}", path.display())),
        },
    }
}

/// Returns `~/.config/charcount/config.toml` on every platform.
#[must_use]
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("charcount")
        .join("config.toml")
}
