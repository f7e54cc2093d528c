// src/config/types.rs
use serde::Deserialize;

use crate::core::debounce::DEFAULT_DEBOUNCE_MS;
use crate::display::DEFAULT_VISIBLE_DENSITIES;
use crate::models::{DEFAULT_CHARACTER_LIMIT, OptionState};

/// Initial counter options
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub exclude_whitespace: bool,
    pub use_character_limit: bool,
    pub character_limit: i64,
}

impl CounterConfig {
    #[must_use]
    pub const fn option_state(&self) -> OptionState {
        OptionState {
            exclude_whitespace: self.exclude_whitespace,
            use_character_limit: self.use_character_limit,
            character_limit: self.character_limit,
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            exclude_whitespace: false,
            use_character_limit: false,
            character_limit: DEFAULT_CHARACTER_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub visible_densities: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            visible_densities: DEFAULT_VISIBLE_DENSITIES,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
