//! Wordle Pattern Art
//!
//! Searches for Wordle guess sequences that draw a chosen grid of feedback
//! patterns against a known solution, where every guess narrows the set of
//! possible solutions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_art::art::{SearchOutcome, search};
//! use wordle_art::core::{Pattern, Word};
//!
//! let solution = Word::new("prism").unwrap();
//! let dictionary: Vec<Word> = ["carol", "alien", "brisk", "prism"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let art: Vec<Pattern> = ["--Y--", "--G--", "-GGG-", "GGGGG"]
//!     .iter()
//!     .map(|p| p.parse().unwrap())
//!     .collect();
//!
//! match search(&art, &solution, &dictionary, &dictionary).unwrap() {
//!     SearchOutcome::Found(guesses) => println!("{guesses:?}"),
//!     SearchOutcome::NotFound => println!("no luck"),
//! }
//! ```

// Core domain types
pub mod core;

// Feasibility, filtering and the combination search
pub mod art;

// Library error type
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::ArtError;
