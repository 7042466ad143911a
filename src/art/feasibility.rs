//! Up-front check that every requested pattern can be produced at all
//!
//! This is necessary but not sufficient: it says nothing about whether one
//! combination of guesses realizes every row at once. The search decides that.

use crate::core::{Pattern, Word, check_row_count};
use crate::error::ArtError;
use rustc_hash::FxHashSet;

/// Every pattern some dictionary word produces against `solution`
#[must_use]
pub fn reachable_patterns(solution: &Word, dictionary: &[Word]) -> FxHashSet<Pattern> {
    dictionary
        .iter()
        .map(|word| Pattern::calculate(word, solution))
        .collect()
}

/// Requested patterns that no dictionary word produces, deduplicated, in
/// order of first appearance
///
/// # Errors
/// Returns `ArtError::InvalidInput` for more than six patterns, before the
/// dictionary is scanned.
pub fn unreachable_patterns(
    patterns: &[Pattern],
    solution: &Word,
    dictionary: &[Word],
) -> Result<Vec<Pattern>, ArtError> {
    check_row_count(patterns.len())?;

    let reachable = reachable_patterns(solution, dictionary);
    let mut seen = FxHashSet::default();
    Ok(patterns
        .iter()
        .copied()
        .filter(|p| !reachable.contains(p) && seen.insert(*p))
        .collect())
}

/// Whether every requested pattern is produced by at least one dictionary
/// word against `solution`
///
/// Order and repeats in `patterns` do not matter.
///
/// # Errors
/// Returns `ArtError::InvalidInput` for more than six patterns.
///
/// # Examples
/// ```
/// use wordle_art::art::is_achievable;
/// use wordle_art::core::{Pattern, Word};
///
/// let solution = Word::new("prism").unwrap();
/// let dictionary = vec![Word::new("crane").unwrap(), Word::new("prism").unwrap()];
///
/// assert!(is_achievable(&[Pattern::PERFECT], &solution, &dictionary).unwrap());
/// assert!(!is_achievable(&[Pattern::PERFECT], &solution, &dictionary[..1]).unwrap());
/// ```
pub fn is_achievable(
    patterns: &[Pattern],
    solution: &Word,
    dictionary: &[Word],
) -> Result<bool, ArtError> {
    Ok(unreachable_patterns(patterns, solution, dictionary)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn p(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn perfect_pattern_needs_solution_in_dictionary() {
        let solution = Word::new("prism").unwrap();
        let without = words(&["crane", "slate", "brisk"]);
        let with = words(&["crane", "slate", "brisk", "prism"]);

        assert!(!is_achievable(&[Pattern::PERFECT], &solution, &without).unwrap());
        assert!(is_achievable(&[Pattern::PERFECT], &solution, &with).unwrap());
    }

    #[test]
    fn order_and_repeats_do_not_matter() {
        let solution = Word::new("prism").unwrap();
        let dictionary = words(&["crane", "prism"]);
        // crane vs prism: only the R lines up
        let crane = p("-G---");

        assert!(is_achievable(&[crane, Pattern::PERFECT], &solution, &dictionary).unwrap());
        assert!(
            is_achievable(
                &[Pattern::PERFECT, crane, crane, Pattern::PERFECT],
                &solution,
                &dictionary
            )
            .unwrap()
        );
    }

    #[test]
    fn reports_each_missing_pattern_once() {
        let solution = Word::new("prism").unwrap();
        let dictionary = words(&["crane"]);
        let missing = unreachable_patterns(
            &[Pattern::PERFECT, p("-G---"), Pattern::PERFECT, p("G----")],
            &solution,
            &dictionary,
        )
        .unwrap();

        assert_eq!(missing, vec![Pattern::PERFECT, p("G----")]);
    }

    #[test]
    fn empty_request_is_achievable() {
        let solution = Word::new("prism").unwrap();
        assert!(is_achievable(&[], &solution, &[]).unwrap());
    }

    #[test]
    fn seven_rows_rejected() {
        let solution = Word::new("prism").unwrap();
        let err = is_achievable(&[Pattern::PERFECT; 7], &solution, &[]).unwrap_err();
        assert!(matches!(err, ArtError::InvalidInput(_)));
    }

    #[test]
    fn reachable_set_contents() {
        let solution = Word::new("prism").unwrap();
        let reachable = reachable_patterns(&solution, &words(&["crane", "prism", "brisk"]));

        assert_eq!(reachable.len(), 3);
        assert!(reachable.contains(&Pattern::PERFECT));
        assert!(reachable.contains(&p("-GGG-")));
    }
}
