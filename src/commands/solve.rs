//! Solve command
//!
//! Runs one solver against one target word and prints the solution path.

use crate::core::Word;
use crate::dict::Dictionary;
use crate::output::print_solve_report;
use crate::solver::{SolveReport, Solver, StrategyKind};
use anyhow::{Context, Result};

/// Resolve the target, run the chosen solver, and print the report
///
/// `target_input` may be a word or the literal `RANDOM` (case-insensitive)
/// to pick a random dictionary word. An off-dictionary target is warned
/// about but still attempted, which normally ends in a failed run.
///
/// # Errors
/// Fails when the target word is malformed, or when `RANDOM` is requested
/// against an empty dictionary.
pub fn run_solve(
    dict: &Dictionary,
    target_input: &str,
    strategy_name: &str,
    verbose: bool,
) -> Result<()> {
    let target = if target_input.eq_ignore_ascii_case("RANDOM") {
        dict.random_word()
            .context("cannot pick a random target: word list is empty")?
            .clone()
    } else {
        let word = Word::new(target_input)
            .with_context(|| format!("invalid target word {target_input:?}"))?;
        if !dict.contains(&word) {
            println!("Warning: {word} is not in the dictionary; the solver may fail.");
        }
        word
    };

    let report = solve_with(dict, &target, strategy_name);
    print_solve_report(&report, verbose);
    Ok(())
}

/// Run the named strategy against a target
#[must_use]
pub fn solve_with(dict: &Dictionary, target: &Word, strategy_name: &str) -> SolveReport {
    let strategy = StrategyKind::from_name(strategy_name);
    Solver::new(dict, strategy).solve(target)
}
