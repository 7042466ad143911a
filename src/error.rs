//! Errors produced by the pattern-art library

use crate::core::{Pattern, PatternError, WordError};
use itertools::Itertools;
use thiserror::Error;

/// The errors that `wordle_art` can produce.
///
/// An exhausted search is not an error; see
/// [`SearchOutcome::NotFound`](crate::art::SearchOutcome::NotFound).
#[derive(Debug, Error)]
pub enum ArtError {
    /// Too many rows, or parallel inputs of different lengths
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Some requested pattern cannot be produced by any dictionary word
    #[error("pattern not possible with this solution: {}", .unreachable.iter().map(|p| p.to_emoji()).join(" "))]
    InfeasiblePattern { unreachable: Vec<Pattern> },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Word(#[from] WordError),
}
