//! Candidate filtering against a guess history
//!
//! A word `w` survives a (guess, pattern) pair when playing `guess` against
//! `w` as the solution would have produced exactly `pattern`.

use crate::core::{Pattern, Word};
use crate::error::ArtError;

/// Solution candidates left after applying a guess history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a> {
    pub count: usize,
    pub remaining: Vec<&'a Word>,
}

/// Apply one (guess, pattern) pair to an already filtered candidate list
#[must_use]
pub fn narrow<'a>(candidates: &[&'a Word], guess: &Word, pattern: Pattern) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .collect()
}

fn check_lengths(guesses: usize, patterns: usize) -> Result<(), ArtError> {
    if guesses != patterns {
        return Err(ArtError::InvalidInput(format!(
            "{guesses} guesses but {patterns} patterns"
        )));
    }
    Ok(())
}

/// Filter `pool` down to the words consistent with every (guess, pattern)
/// pair, applied in order
///
/// # Errors
/// Returns `ArtError::InvalidInput` if `guesses` and `patterns` differ in
/// length.
///
/// # Examples
/// ```
/// use wordle_art::art::filter_candidates;
/// use wordle_art::core::{Pattern, Word};
///
/// let pool: Vec<Word> = ["prism", "brisk", "crane"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let pattern = Pattern::calculate(&guess, &pool[0]);
///
/// let filtered = filter_candidates(&[guess], &[pattern], &pool).unwrap();
/// assert_eq!(filtered.count, 2); // prism and brisk both give -G---
/// ```
pub fn filter_candidates<'a>(
    guesses: &[Word],
    patterns: &[Pattern],
    pool: &'a [Word],
) -> Result<Filtered<'a>, ArtError> {
    check_lengths(guesses.len(), patterns.len())?;

    let mut remaining: Vec<&Word> = pool.iter().collect();
    for (guess, &pattern) in guesses.iter().zip(patterns) {
        remaining = narrow(&remaining, guess, pattern);
    }

    Ok(Filtered {
        count: remaining.len(),
        remaining,
    })
}

/// Remaining candidate count after each prefix of the history
///
/// Entry `k` is the count after applying the first `k + 1` pairs. The
/// result is non-increasing.
///
/// # Errors
/// Returns `ArtError::InvalidInput` if `guesses` and `patterns` differ in
/// length.
pub fn count_sequence(
    guesses: &[Word],
    patterns: &[Pattern],
    pool: &[Word],
) -> Result<Vec<usize>, ArtError> {
    check_lengths(guesses.len(), patterns.len())?;

    let mut remaining: Vec<&Word> = pool.iter().collect();
    Ok(guesses
        .iter()
        .zip(patterns)
        .map(|(guess, &pattern)| {
            remaining = narrow(&remaining, guess, pattern);
            remaining.len()
        })
        .collect())
}

/// True when each count is strictly less than the one before it
///
/// Empty and single-element sequences qualify.
#[must_use]
pub fn is_strictly_decreasing(counts: &[usize]) -> bool {
    counts.windows(2).all(|pair| pair[0] > pair[1])
}
