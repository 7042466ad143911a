//! Guess trace command
//!
//! Plays a fixed list of guesses against a target and shows how the
//! candidate solutions shrink, row by row.

use crate::art::{count_sequence, is_strictly_decreasing};
use crate::core::{Pattern, Word, check_row_count};
use crate::error::ArtError;

/// One row of a trace
pub struct TraceStep {
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_after: usize,
}

/// Result of tracing a guess list
pub struct TraceResult {
    pub target: String,
    pub candidates_before: usize,
    pub steps: Vec<TraceStep>,
    pub strictly_decreasing: bool,
}

/// Play `guesses` against `target`, counting the survivors in `solution_pool`
///
/// # Errors
///
/// Returns an error if any word is invalid or more than six guesses were
/// given.
pub fn trace_guesses(
    target: &str,
    guesses: &[String],
    solution_pool: &[Word],
) -> Result<TraceResult, ArtError> {
    check_row_count(guesses.len())?;
    let solution = Word::new(target)?;
    let guesses = guesses
        .iter()
        .map(Word::new)
        .collect::<Result<Vec<_>, _>>()?;

    let patterns: Vec<Pattern> = guesses
        .iter()
        .map(|guess| Pattern::calculate(guess, &solution))
        .collect();
    let counts = count_sequence(&guesses, &patterns, solution_pool)?;

    let strictly_decreasing = is_strictly_decreasing(&counts);
    let steps = guesses
        .into_iter()
        .zip(patterns)
        .zip(counts)
        .map(|((guess, pattern), candidates_after)| TraceStep {
            guess,
            pattern,
            candidates_after,
        })
        .collect();

    Ok(TraceResult {
        target: solution.text().to_string(),
        candidates_before: solution_pool.len(),
        steps,
        strictly_decreasing,
    })
}
