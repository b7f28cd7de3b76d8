//! Benchmark command
//!
//! Evaluates a solver across many target words. Runs are independent (each
//! owns its candidate pool, the dictionary is read-only), so targets are
//! scored in parallel.

use crate::core::Word;
use crate::solver::{SolveReport, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregate result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Attempts → number of solved targets
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver against every target word
///
/// The solver is shared immutably across worker threads; ordering of
/// targets does not affect any individual run.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<'_, S>,
    targets: &[Word],
) -> BenchmarkResult {
    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let reports: Vec<SolveReport> = targets
        .par_iter()
        .map(|target| {
            let report = solver.solve(target);
            progress.inc(1);
            report
        })
        .collect();

    progress.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved = 0;
    let mut total_attempts = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for report in &reports {
        if report.is_solved() {
            let attempts = report.attempts();
            solved += 1;
            total_attempts += attempts;
            min_guesses = min_guesses.min(attempts);
            max_guesses = max_guesses.max(attempts);
            *distribution.entry(attempts).or_insert(0) += 1;
        }
    }

    let total_words = targets.len();
    let average_guesses = if solved > 0 {
        total_attempts as f64 / solved as f64
    } else {
        0.0
    };

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        distribution,
        average_guesses,
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
