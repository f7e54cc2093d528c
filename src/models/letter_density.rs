// src/models/letter_density.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterDensity {
    /// Always an uppercase ASCII letter.
    pub letter: char,
    pub count: usize,
    pub percent: f64,
}

impl LetterDensity {
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn new(letter: char, count: usize, total_letters: usize) -> Self {
        let percent = if total_letters == 0 {
            0.0
        } else {
            (count as f64 / total_letters as f64) * 100.0
        };
        Self {
            letter,
            count,
            percent,
        }
    }
}
