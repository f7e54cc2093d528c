// src/core/store.rs
use log::debug;

use crate::core::channel::{Channel, Subscription};
use crate::core::engine::{self, compute_stats, letter_densities};
use crate::models::{
    CharacterLimitState, CharacterStats, DEFAULT_CHARACTER_LIMIT, LetterDensity, OptionState,
};

/// Owns the editor options and the latest derived snapshots.
///
/// All mutation goes through the methods below. Display surfaces subscribe
/// to whichever of the three channels they need and only ever read.
///
/// `set_character_limit` republishes the limit state straight away, while
/// `set_exclude_whitespace` and `set_use_character_limit` publish nothing:
/// callers that want the change visible must follow up with
/// [`CounterStore::update_stats`].
#[derive(Debug)]
pub struct CounterStore {
    options: OptionState,
    stats: Channel<CharacterStats>,
    limit_state: Channel<CharacterLimitState>,
    densities: Channel<Vec<LetterDensity>>,
}

impl CounterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(OptionState::new())
    }

    /// Starts from zeroed snapshots; the limit state reports the given limit.
    #[must_use]
    pub fn with_options(options: OptionState) -> Self {
        Self {
            options,
            stats: Channel::new(CharacterStats::new()),
            limit_state: Channel::new(CharacterLimitState::evaluate(
                0,
                options.character_limit,
                options.use_character_limit,
            )),
            densities: Channel::new(Vec::new()),
        }
    }

    pub fn set_exclude_whitespace(&mut self, exclude: bool) {
        self.options.exclude_whitespace = exclude;
    }

    pub fn set_use_character_limit(&mut self, enabled: bool) {
        self.options.use_character_limit = enabled;
    }

    /// Changes the limit and republishes the limit state from the last
    /// known character count, without rescanning any text.
    pub fn set_character_limit(&mut self, limit: i64) {
        self.options.character_limit = limit;
        let character_count = self.stats.current().character_count;
        self.publish_limit_state(character_count);
    }

    /// Recomputes every snapshot from `text` and publishes all three.
    pub fn update_stats(&mut self, text: &str) {
        let stats = compute_stats(text, &self.options);
        let densities = letter_densities(text);
        debug!(
            "stats updated: {} chars, {} words, {} sentences, {} distinct letters",
            stats.character_count,
            stats.word_count,
            stats.sentence_count,
            densities.len()
        );

        self.stats.publish(stats);
        self.publish_limit_state(stats.character_count);
        self.densities.publish(densities);
    }

    /// Whether `text` has already reached the limit, without touching state.
    ///
    /// Unlike `is_over_limit` this is true once the count equals the limit,
    /// which is what an input guard needs to stop further typing.
    #[must_use]
    pub fn is_character_limit_reached(&self, text: &str) -> bool {
        if !self.options.use_character_limit {
            return false;
        }
        let count = engine::character_count(text, self.options.exclude_whitespace);
        i64::try_from(count).unwrap_or(i64::MAX) >= self.options.character_limit
    }

    #[must_use]
    pub const fn character_limit(&self) -> i64 {
        self.options.character_limit
    }

    #[must_use]
    pub const fn is_character_limit_enabled(&self) -> bool {
        self.options.use_character_limit
    }

    #[must_use]
    pub const fn exclude_whitespace(&self) -> bool {
        self.options.exclude_whitespace
    }

    #[must_use]
    pub const fn default_character_limit(&self) -> i64 {
        DEFAULT_CHARACTER_LIMIT
    }

    #[must_use]
    pub const fn options(&self) -> &OptionState {
        &self.options
    }

    #[must_use]
    pub fn stats(&self) -> CharacterStats {
        self.stats.current()
    }

    #[must_use]
    pub fn limit_state(&self) -> CharacterLimitState {
        self.limit_state.current()
    }

    #[must_use]
    pub fn densities(&self) -> Vec<LetterDensity> {
        self.densities.current()
    }

    #[must_use]
    pub fn subscribe_stats(&self) -> Subscription<CharacterStats> {
        self.stats.subscribe()
    }

    #[must_use]
    pub fn subscribe_limit_state(&self) -> Subscription<CharacterLimitState> {
        self.limit_state.subscribe()
    }

    #[must_use]
    pub fn subscribe_densities(&self) -> Subscription<Vec<LetterDensity>> {
        self.densities.subscribe()
    }

    fn publish_limit_state(&self, character_count: usize) {
        self.limit_state.publish(CharacterLimitState::evaluate(
            character_count,
            self.options.character_limit,
            self.options.use_character_limit,
        ));
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
