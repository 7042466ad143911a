//! Formatting utilities for terminal output

use crate::core::Word;
use itertools::Itertools;

/// Format a count with thousands separators, e.g. `1,234,567`
#[must_use]
pub fn format_count(value: u128) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    result
}

/// Join words with single spaces, uppercased
#[must_use]
pub fn format_guesses(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text().to_uppercase())
        .join(" ")
}
