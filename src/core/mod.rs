//! Core domain types for Wordle pattern art
//!
//! Words, feedback patterns and bounded pattern sequences. Everything here is
//! pure and independent of word lists.

mod pattern;
mod sequence;
mod word;

pub use pattern::{Feedback, Pattern, PatternError};
pub use sequence::{MAX_ROWS, PatternSequence, check_row_count};
pub use word::{WORD_LEN, Word, WordError};
