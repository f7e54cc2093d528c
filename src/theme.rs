// src/theme.rs
//! Light/dark preference, persisted across sessions.

mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, default_state_path};

use std::env;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::CounterError;

pub const THEME_STORAGE_KEY: &str = "character-counter-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; anything but `light` or `dark` is rejected.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guesses the terminal background from `COLORFGBG` (`"fg;bg"`).
///
/// Background colours 0-6 and 8 are the dark half of the ANSI palette.
#[must_use]
pub fn terminal_prefers_dark() -> bool {
    env::var("COLORFGBG")
        .ok()
        .and_then(|value| {
            value
                .rsplit(';')
                .next()
                .and_then(|bg| bg.trim().parse::<u8>().ok())
        })
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

/// Owns the current theme and writes every change through to storage.
#[derive(Debug)]
pub struct ThemeService<S: KeyValueStorage> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStorage> ThemeService<S> {
    /// Reads the stored theme once, falling back to the system preference
    /// and then to light.
    pub fn load(storage: S, prefers_dark: bool) -> Self {
        let stored = storage
            .get(THEME_STORAGE_KEY)
            .and_then(|value| Theme::from_stored(&value));
        let theme = stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light });
        debug!(
            "theme loaded: {theme} ({})",
            if stored.is_some() { "stored" } else { "system default" }
        );
        Self { storage, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), CounterError> {
        self.theme = theme;
        self.storage.set(THEME_STORAGE_KEY, theme.as_str())?;
        debug!("theme persisted: {theme}");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub fn toggle_theme(&mut self) -> Result<Theme, CounterError> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}
