// tests/integration_tests/stats_test.rs
use super::common::{SAMPLE_TEXT, assert_close};
use charcount::core::engine::{compute_stats, letter_densities, sentence_count, word_count};
use charcount::models::OptionState;

#[test]
fn test_sample_text_stats() {
    let stats = compute_stats(SAMPLE_TEXT, &OptionState::new());

    assert_eq!(stats.character_count, SAMPLE_TEXT.len());
    assert_eq!(stats.word_count, 3);
    assert_eq!(stats.sentence_count, 2);
    assert_close(stats.read_time, 0.015);
}

#[test]
fn test_sample_text_density_leaders() {
    let densities = letter_densities(SAMPLE_TEXT);

    let leaders: Vec<(char, usize)> = densities.iter().take(2).map(|d| (d.letter, d.count)).collect();
    assert_eq!(leaders, vec![('O', 4), ('L', 3)]);
    assert!(densities.iter().skip(2).all(|d| d.count == 1));

    let total: f64 = densities.iter().map(|d| d.percent).sum();
    assert_close(total, 100.0);
}

#[test]
fn test_whitespace_only_text() {
    assert_eq!(word_count(" \t\n "), 0);
    assert_eq!(sentence_count(" \t\n "), 0);
    assert!(letter_densities(" \t\n ").is_empty());
}

#[test]
fn test_digits_and_punctuation_never_reach_density() {
    let text = "42 is 6 x 7!";
    let densities = letter_densities(text);
    let letters: String = densities.iter().map(|d| d.letter).collect();
    assert_eq!(letters, "ISX");

    let stats = compute_stats(text, &OptionState::new());
    assert_eq!(stats.word_count, 5);
    assert_eq!(stats.sentence_count, 1);
}

#[test]
fn test_long_text_read_time() {
    let text = "word ".repeat(450);
    let stats = compute_stats(&text, &OptionState::new());
    assert_eq!(stats.word_count, 450);
    assert_close(stats.read_time, 2.25);
}
