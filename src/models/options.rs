// src/models/options.rs

pub const DEFAULT_CHARACTER_LIMIT: i64 = 300;

/// Editor options owned by the counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionState {
    pub exclude_whitespace: bool,
    pub use_character_limit: bool,
    /// Signed so a negative limit entered by the user is kept as typed.
    pub character_limit: i64,
}

impl OptionState {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclude_whitespace: false,
            use_character_limit: false,
            character_limit: DEFAULT_CHARACTER_LIMIT,
        }
    }
}

impl Default for OptionState {
    fn default() -> Self {
        Self::new()
    }
}
