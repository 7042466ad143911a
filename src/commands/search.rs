//! Pattern-art search command
//!
//! Runs the full search for one solution and pattern grid, with an optional
//! progress bar over the enumeration.

use crate::art::{ArtSearch, Execution, SearchOutcome};
use crate::core::{Pattern, Word};
use crate::error::ArtError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a search run
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub target: String,
    pub patterns: Vec<Pattern>,
    pub parallel: bool,
    pub chunk_size: usize,
    pub progress: bool,
}

impl SearchConfig {
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;

    #[must_use]
    pub const fn new(target: String, patterns: Vec<Pattern>) -> Self {
        Self {
            target,
            patterns,
            parallel: false,
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            progress: false,
        }
    }

    const fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel {
                chunk_size: self.chunk_size,
            }
        } else {
            Execution::Sequential
        }
    }
}

/// Result of a search run
#[derive(Debug)]
pub struct SearchReport {
    pub target: String,
    pub patterns: Vec<Pattern>,
    pub pool_sizes: Vec<usize>,
    pub total_combinations: u128,
    pub checked: u64,
    pub outcome: SearchOutcome,
    pub duration: Duration,
}

/// Search for guesses drawing `config.patterns` against `config.target`
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - More than six patterns were requested
/// - Some pattern cannot be produced by any dictionary word
pub fn run_search(
    config: &SearchConfig,
    dictionary: &[Word],
    solution_pool: &[Word],
) -> Result<SearchReport, ArtError> {
    let target = Word::new(&config.target)?;
    let start = Instant::now();

    let search = ArtSearch::new(&config.patterns, &target, dictionary, solution_pool)?;
    let total_combinations = search.total_combinations();

    let pb = if config.progress {
        progress_bar(total_combinations)
    } else {
        ProgressBar::hidden()
    };

    let mut checked = 0u64;
    let outcome = search.run_with(config.execution(), |n| {
        checked += n;
        pb.inc(n);
    });

    if outcome.is_found() {
        pb.finish_with_message("Found!");
    } else {
        pb.finish_with_message("Exhausted");
    }

    Ok(SearchReport {
        target: search.solution().text().to_string(),
        patterns: search.patterns().to_vec(),
        pool_sizes: search.pool_sizes(),
        total_combinations,
        checked,
        outcome,
        duration: start.elapsed(),
    })
}

fn progress_bar(total: u128) -> ProgressBar {
    let pb = ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX));
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({percent}%) | {per_sec} | {msg}")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["crane", "brisk", "prism", "slate", "wrist"])
    }

    fn art() -> Vec<Pattern> {
        ["-G---", "-GGG-", "GGGGG"]
            .iter()
            .map(|p| p.parse().unwrap())
            .collect()
    }

    #[test]
    fn search_reports_found_combination() {
        let words = dictionary();
        let config = SearchConfig::new("prism".to_string(), art());

        let report = run_search(&config, &words, &words).unwrap();

        assert_eq!(report.target, "prism");
        assert_eq!(report.pool_sizes, vec![1, 2, 1]);
        assert_eq!(report.total_combinations, 2);
        assert_eq!(report.checked, 1);
        assert_eq!(
            report.outcome,
            SearchOutcome::Found(words_from_slice(&["crane", "brisk", "prism"]))
        );
    }

    #[test]
    fn parallel_search_reports_same_outcome() {
        let words = dictionary();
        let mut config = SearchConfig::new("PRISM".to_string(), art());
        config.parallel = true;
        config.chunk_size = 1;

        let report = run_search(&config, &words, &words).unwrap();
        assert_eq!(
            report.outcome,
            SearchOutcome::Found(words_from_slice(&["crane", "brisk", "prism"]))
        );
    }

    #[test]
    fn search_exhausted_is_not_an_error() {
        let words = dictionary();
        let pool = words_from_slice(&["prism", "crane"]);
        let config = SearchConfig::new("prism".to_string(), art());

        let report = run_search(&config, &words, &pool).unwrap();
        assert_eq!(report.outcome, SearchOutcome::NotFound);
        assert_eq!(report.checked, 2);
    }

    #[test]
    fn invalid_target_returns_error() {
        let words = dictionary();
        let config = SearchConfig::new("prisms".to_string(), art());

        assert!(matches!(
            run_search(&config, &words, &words),
            Err(ArtError::Word(_))
        ));
    }

    #[test]
    fn infeasible_art_returns_error() {
        let words = words_from_slice(&["crane", "slate"]);
        let config = SearchConfig::new("prism".to_string(), art());

        assert!(matches!(
            run_search(&config, &words, &words),
            Err(ArtError::InfeasiblePattern { .. })
        ));
    }
}
