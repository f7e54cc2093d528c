// src/core/engine/density.rs
use crate::models::LetterDensity;

const ALPHABET_LEN: usize = 26;

/// Builds the letter frequency table for `text`, most frequent first.
///
/// Letters are matched after full uppercasing, so `ß` contributes two `S`.
/// Anything that is not ASCII `A`-`Z` afterwards is ignored. Letters with
/// equal counts keep the order in which they first appeared.
#[inline]
#[must_use]
pub fn letter_densities(text: &str) -> Vec<LetterDensity> {
    let mut slots: [Option<usize>; ALPHABET_LEN] = [None; ALPHABET_LEN];
    let mut tallies: Vec<(char, usize)> = Vec::new();

    for letter in text.to_uppercase().chars().filter(char::is_ascii_uppercase) {
        let index = usize::from(u8::try_from(letter).unwrap_or(b'A') - b'A');
        let Some(slot) = slots.get_mut(index) else {
            continue;
        };
        match *slot {
            Some(position) => {
                if let Some(tally) = tallies.get_mut(position) {
                    tally.1 = tally.1.saturating_add(1);
                }
            }
            None => {
                *slot = Some(tallies.len());
                tallies.push((letter, 1));
            }
        }
    }

    let total: usize = tallies.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut densities: Vec<LetterDensity> = tallies
        .into_iter()
        .map(|(letter, count)| LetterDensity::new(letter, count, total))
        .collect();
    // Percent is monotonic in count, so comparing counts keeps the sort exact.
    densities.sort_by(|a, b| b.count.cmp(&a.count));
    densities
}
