//! Pattern-art search
//!
//! Given a solution and the feedback rows to draw, find guesses that draw
//! them while narrowing the candidate solutions at every row.

mod feasibility;
mod filter;
mod product;
mod search;

pub use feasibility::{is_achievable, reachable_patterns, unreachable_patterns};
pub use filter::{Filtered, count_sequence, filter_candidates, is_strictly_decreasing, narrow};
pub use product::{Combinations, product_size};
pub use search::{ArtSearch, Execution, SearchOutcome, search};
