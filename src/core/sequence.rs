//! Bounded sequence of feedback patterns, one per guess row

use super::Pattern;
use crate::error::ArtError;
use std::ops::Deref;

/// Wordle allows at most six guesses
pub const MAX_ROWS: usize = 6;

/// Reject a row count that does not fit on a Wordle board
///
/// # Errors
/// Returns `ArtError::InvalidInput` if `rows` exceeds [`MAX_ROWS`].
pub fn check_row_count(rows: usize) -> Result<(), ArtError> {
    if rows > MAX_ROWS {
        return Err(ArtError::InvalidInput(format!(
            "Wordle may only have {MAX_ROWS} guesses, got {rows} patterns"
        )));
    }
    Ok(())
}

/// The pattern art: an ordered list of at most six patterns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternSequence(Vec<Pattern>);

impl PatternSequence {
    /// Wrap a list of patterns, enforcing the row limit
    ///
    /// # Errors
    /// Returns `ArtError::InvalidInput` for more than [`MAX_ROWS`] patterns.
    pub fn new(patterns: Vec<Pattern>) -> Result<Self, ArtError> {
        check_row_count(patterns.len())?;
        Ok(Self(patterns))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Pattern] {
        &self.0
    }
}

impl Deref for PatternSequence {
    type Target = [Pattern];

    fn deref(&self) -> &[Pattern] {
        &self.0
    }
}

impl TryFrom<Vec<Pattern>> for PatternSequence {
    type Error = ArtError;

    fn try_from(patterns: Vec<Pattern>) -> Result<Self, Self::Error> {
        Self::new(patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_up_to_six_rows() {
        for rows in 0..=MAX_ROWS {
            let seq = PatternSequence::new(vec![Pattern::PERFECT; rows]).unwrap();
            assert_eq!(seq.len(), rows);
        }
    }

    #[test]
    fn rejects_seven_rows() {
        let err = PatternSequence::new(vec![Pattern::PERFECT; 7]).unwrap_err();
        assert!(matches!(err, ArtError::InvalidInput(_)));
    }

    #[test]
    fn try_from_vec() {
        let seq: Result<PatternSequence, _> = vec![Pattern::new(0); 2].try_into();
        assert_eq!(seq.unwrap().as_slice(), &[Pattern::new(0); 2]);
    }
}
