// src/utils.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Read as _};
use std::path::Path;

/// Reads the whole input text from `path`, or from stdin when no path is given.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened or read
/// * The input is not valid UTF-8
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

/// Parses a character limit the lenient way a form field does.
///
/// Leading whitespace is skipped, an optional sign is honoured and the
/// leading run of digits is used, so `"42 chars"` is 42 and `"-5"` is -5.
/// Input with no digits after the sign yields 0. Out of range values
/// saturate.
#[must_use]
pub fn parse_limit(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0_i64, |acc, digit| {
            let digit = i64::from(digit);
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
