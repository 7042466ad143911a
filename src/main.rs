//! Wordle Pattern Art - CLI
//!
//! Finds guesses that draw a feedback-pattern picture on a Wordle board for a
//! known solution, with every guess narrowing the possible answers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use wordle_art::{
    commands::{SearchConfig, check_art, run_search, trace_guesses},
    core::{Pattern, PatternSequence, Word},
    output::{print_art, print_check_result, print_search_report, print_trace_result},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_art",
    about = "Find Wordle guesses that draw a chosen feedback pattern",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary of allowed guesses, one word per line
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: PathBuf,

    /// Possible solutions, one word per line (defaults to the dictionary, with a warning)
    #[arg(short = 's', long, global = true)]
    solutions: Option<PathBuf>,

    /// Log debug details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for guesses that draw the pattern art
    Search {
        /// The known solution word
        target: String,

        /// One pattern per row: G/Y/_ (or G/Y/., 🟩/🟨/⬜, 2/1/0)
        ///
        /// Use `_` or `.` for absent letters; a leading `-` reads as a flag
        #[arg(required = true, value_parser = parse_pattern)]
        patterns: Vec<Pattern>,

        /// Evaluate combinations on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Combinations per parallel batch
        #[arg(long, default_value_t = SearchConfig::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Check that every row of the art can be drawn at all
    Check {
        /// The known solution word
        target: String,

        /// One pattern per row: G/Y/_ (or G/Y/., 🟩/🟨/⬜, 2/1/0)
        ///
        /// Use `_` or `.` for absent letters; a leading `-` reads as a flag
        #[arg(required = true, value_parser = parse_pattern)]
        patterns: Vec<Pattern>,
    },

    /// Play a list of guesses and show how the candidates shrink
    Trace {
        /// The known solution word
        target: String,

        /// Guesses in play order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn parse_pattern(s: &str) -> Result<Pattern, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("failed to read word list {}", path.display()))
}

/// Load word lists based on the -w and -s flags
///
/// Returns (`dictionary`, `solution_pool`)
fn load_wordlists(words: &Path, solutions: Option<&Path>) -> Result<(Vec<Word>, Vec<Word>)> {
    let dictionary = load_words(words)?;
    let solution_pool = match solutions {
        Some(path) => load_words(path)?,
        None => {
            log::warn!("no --solutions list given, using the dictionary as the solution pool");
            dictionary.clone()
        }
    };
    log::info!(
        "loaded {} dictionary words, {} solutions",
        dictionary.len(),
        solution_pool.len()
    );
    Ok((dictionary, solution_pool))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (dictionary, solution_pool) = load_wordlists(&cli.words, cli.solutions.as_deref())?;

    match cli.command {
        Commands::Search {
            target,
            patterns,
            parallel,
            chunk_size,
            no_progress,
        } => {
            let mut config = SearchConfig::new(target, patterns);
            config.parallel = parallel;
            config.chunk_size = chunk_size;
            config.progress = !no_progress;
            run_search_command(&config, &dictionary, &solution_pool)
        }
        Commands::Check { target, patterns } => {
            let result = check_art(&target, &patterns, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Trace { target, guesses } => {
            let result = trace_guesses(&target, &guesses, &solution_pool)?;
            print_trace_result(&result);
            Ok(())
        }
    }
}

fn run_search_command(
    config: &SearchConfig,
    dictionary: &[Word],
    solution_pool: &[Word],
) -> Result<()> {
    let art = PatternSequence::new(config.patterns.clone())?;
    println!("\nRequested art:");
    print_art(&art);
    println!();

    let report = run_search(config, dictionary, solution_pool)
        .with_context(|| format!("cannot draw this art for '{}'", config.target))?;
    print_search_report(&report);
    Ok(())
}
