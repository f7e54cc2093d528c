// src/models/character_stats.rs
use serde::Serialize;

/// Counts derived from a single pass over the editor text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CharacterStats {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    /// Estimated reading time in minutes, unrounded.
    pub read_time: f64,
}

impl CharacterStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            character_count: 0,
            word_count: 0,
            sentence_count: 0,
            read_time: 0.0,
        }
    }
}
