// src/editor.rs
//! The input side of the counter: holds the text being edited, debounces
//! text changes and forwards option changes to the store.
//!
//! The store is passed into each handler rather than owned, so the same
//! store can feed any number of display panels.

use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::core::debounce::{DEFAULT_DEBOUNCE_MS, Debouncer};
use crate::core::store::CounterStore;
use crate::utils::parse_limit;

/// Keys the editor distinguishes when deciding whether to accept input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Tab,
}

impl Key {
    /// Editing and navigation keys stay usable once the limit is reached.
    #[must_use]
    pub const fn bypasses_limit(self) -> bool {
        matches!(
            self,
            Self::Backspace
                | Self::Delete
                | Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Tab
        )
    }
}

#[derive(Debug)]
pub struct Editor {
    text: String,
    debouncer: Debouncer<String>,
}

impl Editor {
    #[must_use]
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            text: String::new(),
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Records new text and (re)starts the debounce window.
    pub fn on_text_changed(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.debouncer.schedule(self.text.clone(), now);
    }

    /// Whether `key` may be applied to the current text.
    #[must_use]
    pub fn on_key(&self, store: &CounterStore, key: Key) -> bool {
        if key.bypasses_limit() || !store.is_character_limit_reached(&self.text) {
            return true;
        }
        warn!(
            "input rejected: character limit of {} reached",
            store.character_limit()
        );
        false
    }

    /// Appends `chunk` if the limit guard allows typing, returning whether it did.
    pub fn insert_str(&mut self, store: &CounterStore, chunk: &str, now: Instant) -> bool {
        let key = chunk.chars().next().map_or(Key::Enter, |c| {
            if c == '\n' { Key::Enter } else { Key::Char(c) }
        });
        if !self.on_key(store, key) {
            return false;
        }
        let mut text = self.text.clone();
        text.push_str(chunk);
        self.on_text_changed(text, now);
        true
    }

    pub fn clear(&mut self, now: Instant) {
        self.on_text_changed(String::new(), now);
    }

    pub fn on_exclude_whitespace_changed(&mut self, store: &mut CounterStore, exclude: bool) {
        debug!("exclude whitespace set to {exclude}");
        store.set_exclude_whitespace(exclude);
        store.update_stats(&self.text);
    }

    pub fn on_character_limit_toggled(&mut self, store: &mut CounterStore, enabled: bool) {
        debug!("character limit {}", if enabled { "enabled" } else { "disabled" });
        store.set_use_character_limit(enabled);
        store.update_stats(&self.text);
    }

    /// Applies a raw limit value; anything that does not parse becomes 0.
    pub fn on_character_limit_changed(&mut self, store: &mut CounterStore, raw: &str) {
        let limit = parse_limit(raw);
        debug!("character limit set to {limit} (from {raw:?})");
        store.set_character_limit(limit);
    }

    /// Runs a pending recomputation once its debounce window has passed.
    ///
    /// Returns whether the store was updated.
    pub fn tick(&mut self, store: &mut CounterStore, now: Instant) -> bool {
        self.debouncer.poll(now).is_some_and(|text| {
            store.update_stats(&text);
            true
        })
    }

    /// Runs any pending recomputation immediately.
    pub fn flush(&mut self, store: &mut CounterStore) -> bool {
        self.debouncer.flush().is_some_and(|text| {
            store.update_stats(&text);
            true
        })
    }

    /// How long until the pending recomputation is due.
    #[must_use]
    pub fn time_until_update(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    #[must_use]
    pub const fn has_pending_update(&self) -> bool {
        self.debouncer.has_pending()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
