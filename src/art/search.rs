//! Pattern-art search
//!
//! Finds a guess per row so that each guess produces that row's pattern
//! against the solution, and the number of remaining solution candidates
//! strictly drops after every guess.

use super::feasibility::unreachable_patterns;
use super::filter::narrow;
use super::product::{Combinations, product_size};
use crate::core::{Pattern, PatternSequence, Word};
use crate::error::ArtError;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

/// How often the sequential search reports progress
const PROGRESS_STRIDE: u64 = 4096;

/// Result of a completed search
///
/// `NotFound` means every combination was checked; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<Word>),
    NotFound,
}

impl SearchOutcome {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// How the combinations get evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// One combination at a time on the calling thread
    #[default]
    Sequential,
    /// Fixed-size chunks of the enumeration evaluated across the rayon pool
    ///
    /// The earliest accepted combination in enumeration order still wins.
    Parallel { chunk_size: usize },
}

/// A prepared search: feasibility checked, per-row guess pools built
pub struct ArtSearch<'a> {
    patterns: PatternSequence,
    solution: &'a Word,
    solution_pool: &'a [Word],
    pools: Vec<Vec<&'a Word>>,
}

impl<'a> ArtSearch<'a> {
    /// Check feasibility and partition `dictionary` into per-row pools
    ///
    /// A word goes into every row whose pattern it produces against
    /// `solution`, so repeated patterns share words.
    ///
    /// # Errors
    /// - `ArtError::InvalidInput` for more than six patterns
    /// - `ArtError::InfeasiblePattern` if some pattern is produced by no
    ///   dictionary word
    pub fn new(
        patterns: &[Pattern],
        solution: &'a Word,
        dictionary: &'a [Word],
        solution_pool: &'a [Word],
    ) -> Result<Self, ArtError> {
        let patterns = PatternSequence::new(patterns.to_vec())?;

        let unreachable = unreachable_patterns(&patterns, solution, dictionary)?;
        if !unreachable.is_empty() {
            return Err(ArtError::InfeasiblePattern { unreachable });
        }

        let mut pools: Vec<Vec<&Word>> = vec![Vec::new(); patterns.len()];
        for word in dictionary {
            let pattern = Pattern::calculate(word, solution);
            for (row, &wanted) in patterns.iter().enumerate() {
                if wanted == pattern {
                    pools[row].push(word);
                }
            }
        }

        for (row, pool) in pools.iter().enumerate() {
            debug!(
                "row {row} ({}): {} candidate guesses",
                patterns[row].to_emoji(),
                pool.len()
            );
        }

        let search = Self {
            patterns,
            solution,
            solution_pool,
            pools,
        };
        info!(
            "search space for {}: {} combinations",
            search.solution,
            search.total_combinations()
        );
        Ok(search)
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        self.solution
    }

    /// Candidate guesses for each row, in dictionary order
    #[must_use]
    pub fn pools(&self) -> &[Vec<&'a Word>] {
        &self.pools
    }

    #[must_use]
    pub fn pool_sizes(&self) -> Vec<usize> {
        self.pools.iter().map(Vec::len).collect()
    }

    /// Size of the search space (saturating)
    #[must_use]
    pub fn total_combinations(&self) -> u128 {
        product_size(&self.pools)
    }

    /// Lazily enumerate every combination, row 0 varying slowest
    #[must_use]
    pub fn combinations(&self) -> Combinations<'_, 'a> {
        Combinations::new(&self.pools)
    }

    /// Whether the remaining-candidate counts strictly drop after each guess
    ///
    /// Stops at the first row that fails to narrow the candidates.
    #[must_use]
    pub fn accepts(&self, combination: &[&Word]) -> bool {
        let mut remaining: Vec<&Word> = self.solution_pool.iter().collect();
        let mut previous: Option<usize> = None;

        for (guess, &pattern) in combination.iter().zip(self.patterns.iter()) {
            remaining = narrow(&remaining, guess, pattern);
            if previous.is_some_and(|count| remaining.len() >= count) {
                return false;
            }
            previous = Some(remaining.len());
        }

        true
    }

    /// Lazily yield every accepted combination, in enumeration order
    pub fn matches(&self) -> impl Iterator<Item = Vec<&'a Word>> + '_ {
        self.combinations()
            .filter(move |combination| self.accepts(combination))
    }

    /// Return the first accepted combination, or `NotFound`
    #[must_use]
    pub fn run(&self) -> SearchOutcome {
        self.run_with(Execution::Sequential, |_| {})
    }

    /// Like [`run`](Self::run), evaluating chunks of `chunk_size`
    /// combinations in parallel
    #[must_use]
    pub fn run_parallel(&self, chunk_size: usize) -> SearchOutcome {
        self.run_with(Execution::Parallel { chunk_size }, |_| {})
    }

    /// Run the search, calling `progress` with the number of combinations
    /// checked since the previous call
    pub fn run_with(&self, execution: Execution, mut progress: impl FnMut(u64)) -> SearchOutcome {
        let found = match execution {
            Execution::Sequential => self.find_sequential(&mut progress),
            Execution::Parallel { chunk_size } => {
                self.find_parallel(chunk_size.max(1), &mut progress)
            }
        };

        match found {
            Some(combination) => {
                info!(
                    "found: {}",
                    combination.iter().map(|w| w.text()).join(" ")
                );
                SearchOutcome::Found(combination.into_iter().cloned().collect())
            }
            None => {
                info!("no combination narrows the candidates at every row");
                SearchOutcome::NotFound
            }
        }
    }

    fn find_sequential(&self, progress: &mut impl FnMut(u64)) -> Option<Vec<&'a Word>> {
        let mut pending = 0;
        let mut found = None;

        for combination in self.combinations() {
            pending += 1;
            if pending == PROGRESS_STRIDE {
                progress(pending);
                pending = 0;
            }
            if self.accepts(&combination) {
                found = Some(combination);
                break;
            }
        }

        if pending > 0 {
            progress(pending);
        }
        found
    }

    fn find_parallel(
        &self,
        chunk_size: usize,
        progress: &mut impl FnMut(u64),
    ) -> Option<Vec<&'a Word>> {
        let mut combinations = self.combinations();

        loop {
            let chunk: Vec<Vec<&Word>> = combinations.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                return None;
            }
            debug!(
                "evaluating chunk of {} ({} of {})",
                chunk.len(),
                combinations.yielded(),
                combinations.total()
            );

            let hit = chunk
                .par_iter()
                .position_first(|combination| self.accepts(combination));
            match hit {
                Some(index) => {
                    progress(index as u64 + 1);
                    return chunk.into_iter().nth(index);
                }
                None => progress(chunk.len() as u64),
            }
        }
    }
}

/// Search for a guess per row that draws `patterns` against `solution`
/// while strictly narrowing `solution_pool` at every row
///
/// # Errors
/// - `ArtError::InvalidInput` for more than six patterns
/// - `ArtError::InfeasiblePattern` if some pattern is produced by no
///   dictionary word
pub fn search(
    patterns: &[Pattern],
    solution: &Word,
    dictionary: &[Word],
    solution_pool: &[Word],
) -> Result<SearchOutcome, ArtError> {
    Ok(ArtSearch::new(patterns, solution, dictionary, solution_pool)?.run())
}
