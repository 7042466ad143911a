//! Word lists for pattern art
//!
//! The dictionary (every allowed guess) and the solution list are plain
//! text files with one word per line.

pub mod loader;

pub use loader::{load_from_file, parse_words, words_from_slice};
