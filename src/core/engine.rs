// src/core/engine.rs
//! Pure text statistics.
//!
//! Every function here is stateless and total: any string is valid input,
//! and nothing can fail. Reading time is the only figure derived from
//! another one (the word count).

mod density;

pub use density::letter_densities;

use crate::models::{CharacterStats, OptionState};

/// Average reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: f64 = 200.0;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Counts characters the way a browser text field reports its length.
///
/// Lengths are UTF-16 code units, so a character outside the Basic
/// Multilingual Plane counts twice. With `exclude_whitespace` every Unicode
/// whitespace character is dropped first.
#[inline]
#[must_use]
pub fn character_count(text: &str, exclude_whitespace: bool) -> usize {
    if exclude_whitespace {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(char::len_utf16)
            .sum()
    } else {
        text.encode_utf16().count()
    }
}

#[inline]
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counts non-empty segments between `.`, `!` and `?`.
///
/// A segment holding only whitespace still counts, so `"Hi. Bye!"` is two
/// sentences and `"a. . b"` is three.
#[inline]
#[must_use]
pub fn sentence_count(text: &str) -> usize {
    text.trim()
        .split(SENTENCE_TERMINATORS)
        .filter(|segment| !segment.is_empty())
        .count()
}

#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn read_time(word_count: usize) -> f64 {
    word_count as f64 / WORDS_PER_MINUTE
}

/// Computes the full stats snapshot for `text` under `options`.
#[inline]
#[must_use]
pub fn compute_stats(text: &str, options: &OptionState) -> CharacterStats {
    let words = word_count(text);
    CharacterStats {
        character_count: character_count(text, options.exclude_whitespace),
        word_count: words,
        sentence_count: sentence_count(text),
        read_time: read_time(words),
    }
}
