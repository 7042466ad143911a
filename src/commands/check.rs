//! Feasibility check command
//!
//! Reports which rows of the art can be drawn at all, without searching.

use crate::core::{Pattern, Word, check_row_count};
use crate::error::ArtError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Result of checking a pattern grid against a solution
pub struct CheckResult {
    pub target: String,
    /// Each requested row with the number of dictionary words drawing it
    pub rows: Vec<(Pattern, usize)>,
    pub unreachable: Vec<Pattern>,
}

impl CheckResult {
    #[must_use]
    pub fn achievable(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Check whether every pattern can be produced against `target`
///
/// # Errors
///
/// Returns an error if the target word is invalid or more than six
/// patterns were given.
pub fn check_art(
    target: &str,
    patterns: &[Pattern],
    dictionary: &[Word],
) -> Result<CheckResult, ArtError> {
    check_row_count(patterns.len())?;
    let solution = Word::new(target)?;

    let mut counts: FxHashMap<Pattern, usize> = patterns.iter().map(|&p| (p, 0)).collect();
    for word in dictionary {
        if let Some(count) = counts.get_mut(&Pattern::calculate(word, &solution)) {
            *count += 1;
        }
    }

    let rows: Vec<(Pattern, usize)> = patterns.iter().map(|&p| (p, counts[&p])).collect();
    let mut seen = FxHashSet::default();
    let unreachable = rows
        .iter()
        .filter(|&&(pattern, count)| count == 0 && seen.insert(pattern))
        .map(|&(pattern, _)| pattern)
        .collect();

    Ok(CheckResult {
        target: solution.text().to_string(),
        rows,
        unreachable,
    })
}
