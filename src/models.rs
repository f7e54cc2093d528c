// src/models.rs
mod character_stats;
mod letter_density;
mod limit_state;
mod options;

pub use character_stats::CharacterStats;
pub use letter_density::LetterDensity;
pub use limit_state::CharacterLimitState;
pub use options::{DEFAULT_CHARACTER_LIMIT, OptionState};
