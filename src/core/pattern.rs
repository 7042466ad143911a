//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use super::word::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Emoji glyph for this feedback square
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for unparseable pattern strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must have exactly 5 symbols, got {0}")]
    InvalidLength(usize),
    #[error("invalid pattern symbol '{0}' (use G/Y/- or 🟩/🟨/⬜ or 2/1/0)")]
    InvalidSymbol(char),
}

/// Feedback pattern for a Wordle guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All Correct (the guess is the solution)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for f in feedback {
            pattern += f as u8 * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all Correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode into per-position feedback, leftmost letter first
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut out = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;
        for slot in &mut out {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        out
    }

    /// Calculate the pattern when `guess` is played and `solution` is the target
    ///
    /// # Algorithm
    /// 1. First pass: positions where the letters agree are Correct, every
    ///    other position starts out Absent
    /// 2. Count the solution letters sitting at those non-Correct positions
    /// 3. Second pass, left to right over the non-Correct positions: a guess
    ///    letter with a remaining count becomes Present and uses one up
    ///
    /// Scanning left to right means that with duplicate letters the earlier
    /// occurrence gets the Present mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_art::core::{Feedback::*, Pattern, Word};
    ///
    /// let guess = Word::new("weary").unwrap();
    /// let solution = Word::new("crane").unwrap();
    ///
    /// assert_eq!(
    ///     Pattern::calculate(&guess, &solution).feedback(),
    ///     [Absent, Present, Correct, Present, Absent]
    /// );
    /// ```
    #[must_use]
    // Allow: Index needed to compare guess[i] with solution[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let solution = solution.chars();
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();

        for i in 0..WORD_LEN {
            if guess[i] == solution[i] {
                result[i] = Feedback::Correct;
            } else {
                *remaining.entry(solution[i]).or_insert(0) += 1;
            }
        }

        for i in 0..WORD_LEN {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess[i])
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::from_feedback(result)
    }

    /// Count the number of Correct squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Correct)
            .count()
    }

    /// Count the number of Present squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.feedback()
            .iter()
            .filter(|&&f| f == Feedback::Present)
            .count()
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback().iter().map(|f| f.glyph()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern from a string like "GY-GY", "🟩🟨⬜🟩🟨" or "21021"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩/'2' for Correct
    /// - 'Y'/'y'/🟨/'1' for Present
    /// - '-'/'_'/'.'/⬜/'0' for Absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LEN {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut feedback = [Feedback::Absent; WORD_LEN];
        for (slot, ch) in feedback.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' | '2' => Feedback::Correct,
                'Y' | 'y' | '🟨' | '1' => Feedback::Present,
                '-' | '_' | '.' | '⬜' | '0' => Feedback::Absent,
                other => return Err(PatternError::InvalidSymbol(other)),
            };
        }

        Ok(Self::from_feedback(feedback))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::Feedback::{Absent, Correct, Present};
    use super::*;
    use proptest::prelude::*;

    fn pattern(guess: &str, solution: &str) -> [Feedback; WORD_LEN] {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap()).feedback()
    }

    #[test]
    fn pattern_perfect_constant() {
        assert!(Pattern::PERFECT.is_perfect());
        assert_eq!(Pattern::PERFECT.count_correct(), 5);
        assert_eq!(Pattern::PERFECT.count_present(), 0);
        assert_eq!(Pattern::PERFECT.feedback(), [Correct; 5]);
    }

    #[test]
    fn pattern_all_absent() {
        let p = Pattern::calculate(&Word::new("abcde").unwrap(), &Word::new("fghij").unwrap());
        assert_eq!(p.value(), 0);
        assert_eq!(p.feedback(), [Absent; 5]);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for word in ["crane", "prism", "zzzzz", "aaaaa", "goner"] {
            let w = Word::new(word).unwrap();
            assert_eq!(Pattern::calculate(&w, &w), Pattern::PERFECT);
        }
    }

    #[test]
    fn pattern_reference_examples() {
        assert_eq!(
            pattern("weary", "crane"),
            [Absent, Present, Correct, Present, Absent]
        );
        assert_eq!(
            pattern("meets", "weary"),
            [Absent, Correct, Absent, Absent, Absent]
        );
        assert_eq!(
            pattern("rower", "goner"),
            [Absent, Correct, Absent, Correct, Correct]
        );
    }

    #[test]
    fn pattern_duplicate_letters_earlier_position_wins() {
        // One spare E in the solution: only the first E of the guess is Present
        assert_eq!(
            pattern("eexxx", "abcde"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn pattern_value_encoding() {
        // Absent, Present, Correct, Present, Absent
        // 0 + 1×3 + 2×9 + 1×27 + 0×81 = 48
        let p = Pattern::calculate(&Word::new("weary").unwrap(), &Word::new("crane").unwrap());
        assert_eq!(p.value(), 48);
        assert_eq!(Pattern::new(48), p);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1: Pattern = "GYG--".parse().unwrap();
        let p2: Pattern = "🟩🟨🟩⬜⬜".parse().unwrap();
        let p3: Pattern = "gyg__".parse().unwrap();
        let p4: Pattern = "21200".parse().unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);

        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(p1.value(), 23);
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert_eq!(
            "GYGGYX".parse::<Pattern>(),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!("GYG".parse::<Pattern>(), Err(PatternError::InvalidLength(3)));
        assert_eq!(
            "GXGGY".parse::<Pattern>(),
            Err(PatternError::InvalidSymbol('X'))
        );
        assert_eq!("".parse::<Pattern>(), Err(PatternError::InvalidLength(0)));
    }

    #[test]
    fn pattern_to_emoji() {
        let p: Pattern = "--Y--".parse().unwrap();
        assert_eq!(p.to_emoji(), "⬜⬜🟨⬜⬜");
        assert_eq!(Pattern::PERFECT.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn pattern_feedback_round_trip() {
        let fb = [Correct, Absent, Present, Present, Correct];
        assert_eq!(Pattern::from_feedback(fb).feedback(), fb);
    }

    proptest! {
        #[test]
        fn correct_count_matches_equal_positions(
            guess in "[a-e]{5}",
            solution in "[a-e]{5}",
        ) {
            let p = Pattern::calculate(&Word::new(&guess).unwrap(), &Word::new(&solution).unwrap());
            let equal = guess.bytes().zip(solution.bytes()).filter(|(a, b)| a == b).count();
            prop_assert_eq!(p.count_correct(), equal);
        }

        #[test]
        fn marked_letters_never_exceed_solution_letters(
            guess in "[a-c]{5}",
            solution in "[a-c]{5}",
        ) {
            let p = Pattern::calculate(&Word::new(&guess).unwrap(), &Word::new(&solution).unwrap());
            prop_assert!(p.count_correct() + p.count_present() <= WORD_LEN);
            for letter in b'a'..=b'c' {
                let marked = guess
                    .bytes()
                    .zip(p.feedback())
                    .filter(|&(g, f)| g == letter && f != Feedback::Absent)
                    .count();
                let available = solution.bytes().filter(|&s| s == letter).count();
                prop_assert!(marked <= available);
            }
        }
    }
}
