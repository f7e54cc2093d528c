// src/models/limit_state.rs
use serde::Serialize;

use super::options::DEFAULT_CHARACTER_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterLimitState {
    pub is_over_limit: bool,
    pub limit: i64,
}

impl CharacterLimitState {
    /// Only reports an overrun when enforcement is switched on.
    #[inline]
    #[must_use]
    pub fn evaluate(character_count: usize, limit: i64, enabled: bool) -> Self {
        let count = i64::try_from(character_count).unwrap_or(i64::MAX);
        Self {
            is_over_limit: enabled && count > limit,
            limit,
        }
    }
}

impl Default for CharacterLimitState {
    fn default() -> Self {
        Self {
            is_over_limit: false,
            limit: DEFAULT_CHARACTER_LIMIT,
        }
    }
}
