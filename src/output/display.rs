//! Display functions for game and solver results

use crate::commands::BenchmarkResult;
use crate::core::{Color, Pattern, Word};
use crate::game::MAX_GUESSES;
use crate::solver::{SolveOutcome, SolveReport};
use colored::Colorize;

/// Render a guess as colored tiles
///
/// Green background for Correct, yellow for Present, gray for Absent,
/// mirroring the classic board.
#[must_use]
pub fn render_tiles(word: &Word, pattern: Pattern) -> String {
    let mut out = String::new();

    for (i, color) in pattern.colors().iter().enumerate() {
        let cell = format!(" {} ", word.letter_at(i) as char);
        let painted = match color {
            Color::Correct => cell.white().bold().on_green(),
            Color::Present => cell.black().on_yellow(),
            Color::Absent => cell.white().on_bright_black(),
        };
        out.push_str(&painted.to_string());
        out.push(' ');
    }

    out
}

/// Print a solver run
///
/// Always shows the per-round guesses and feedback symbols; verbose mode
/// adds the remaining-candidate counts.
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("Target: {}", report.target.as_str().bright_yellow().bold());
    println!("Solver started...");

    for (i, step) in report.steps.iter().enumerate() {
        println!("Guess {}: {}", i + 1, step.guess);
        println!("Feedback: {}", step.feedback);
        if verbose && !step.feedback.is_all_correct() {
            println!("Remaining possibilities: {}", step.remaining);
        }
    }

    match report.outcome {
        SolveOutcome::Solved => {
            let message = format!("Solver won in {} guesses!", report.attempts());
            println!("{}", message.green().bold());
        }
        SolveOutcome::OutOfGuesses => {
            let message = format!("Solver failed to find the word within {MAX_GUESSES} guesses.");
            println!("{}", message.red().bold());
        }
        SolveOutcome::NoCandidates => {
            println!(
                "{}",
                "Error: No words left consistent with feedback!".red().bold()
            );
        }
    }
}

/// Print aggregate benchmark results with an attempt distribution
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n   {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=MAX_GUESSES {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {attempts}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
