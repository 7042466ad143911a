//! Command implementations

pub mod check;
pub mod search;
pub mod trace;

pub use check::{CheckResult, check_art};
pub use search::{SearchConfig, SearchReport, run_search};
pub use trace::{TraceResult, TraceStep, trace_guesses};
