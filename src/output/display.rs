//! Display functions for command results

use super::formatters::{format_count, format_guesses};
use crate::art::SearchOutcome;
use crate::commands::{CheckResult, SearchReport, TraceResult};
use crate::core::Pattern;
use colored::Colorize;

/// Print the pattern art, one row per line
pub fn print_art(patterns: &[Pattern]) {
    for pattern in patterns {
        println!("  {}", pattern.to_emoji());
    }
}

/// Print the result of a search
pub fn print_search_report(report: &SearchReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern art for: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!();
    print_art(&report.patterns);

    println!("\n📊 {}", "Search space:".bright_cyan().bold());
    for (row, (pattern, size)) in report.patterns.iter().zip(&report.pool_sizes).enumerate() {
        println!("   Row {}: {} {size:>6} guesses", row + 1, pattern.to_emoji());
    }
    println!(
        "   Total items to process: {}",
        format_count(report.total_combinations).bright_yellow()
    );
    println!("   Checked:                {}", format_count(u128::from(report.checked)));
    println!("   Time taken:             {:.2}s", report.duration.as_secs_f64());

    println!();
    match &report.outcome {
        SearchOutcome::Found(guesses) => {
            println!("{}", "✅ Found a narrowing sequence:".green().bold());
            for (guess, pattern) in guesses.iter().zip(&report.patterns) {
                println!("   {} {}", pattern.to_emoji(), guess.text().to_uppercase());
            }
            println!("\n   {}", format_guesses(guesses).bright_green());
        }
        SearchOutcome::NotFound => {
            println!(
                "{}",
                "❌ No combination narrows the candidates at every row"
                    .red()
                    .bold()
            );
        }
    }
}

/// Print the result of a feasibility check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FEASIBILITY:".bright_cyan().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (row, (pattern, count)) in result.rows.iter().enumerate() {
        let status = if *count > 0 {
            format!("{count} words").green()
        } else {
            "unreachable".red().bold()
        };
        println!("   Row {}: {} {status}", row + 1, pattern.to_emoji());
    }

    println!();
    if result.achievable() {
        println!("{}", "✅ Every row can be drawn".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} pattern(s) cannot be drawn", result.unreachable.len())
                .red()
                .bold()
        );
    }
}

/// Print a guess trace
pub fn print_trace_result(result: &TraceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tracing: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n   Start: {} candidates", result.candidates_before);

    let mut before = result.candidates_before;
    for (i, step) in result.steps.iter().enumerate() {
        let after = format!("{}", step.candidates_after);
        let after = if i == 0 || step.candidates_after < before {
            after.green()
        } else {
            after.red()
        };
        println!(
            "   Turn {}: {} {}  → {after}",
            i + 1,
            step.guess.text().to_uppercase(),
            step.pattern.to_emoji()
        );
        before = step.candidates_after;
    }

    println!();
    if result.strictly_decreasing {
        println!("{}", "✅ Candidates shrink at every row".green().bold());
    } else {
        println!("{}", "❌ Some row does not narrow the candidates".red().bold());
    }
}
