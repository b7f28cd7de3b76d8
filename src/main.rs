//! Wordle Simulator - CLI
//!
//! Play the game manually, run a solver against a chosen target, or
//! benchmark a solver across the whole dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_sim::{
    commands::{run_benchmark, run_play, run_solve},
    dict::Dictionary,
    output::print_benchmark_result,
    solver::{Solver, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle game simulator with consistency-filtering and minimax solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: consistency (default) or minimax
    #[arg(short, long, global = true, default_value = "consistency")]
    strategy: String,

    /// Path to a word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a manual game against a random target (default)
    Play,

    /// Run a solver against a target word (or 'RANDOM')
    Solve {
        /// The target word, or 'RANDOM' for a random dictionary word
        word: String,

        /// Show remaining-candidate counts per round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark a solver across dictionary words
    Benchmark {
        /// Limit the number of target words (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dict = match &cli.wordlist {
        Some(path) => Dictionary::load_from_file(path)
            .with_context(|| format!("failed to load word list from {}", path.display()))?,
        None => Dictionary::embedded(),
    };
    if dict.is_empty() {
        bail!("word list contains no valid 5-letter words");
    }
    println!("Loaded {} words.", dict.len());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&dict),
        Commands::Solve { word, verbose } => run_solve(&dict, &word, &cli.strategy, verbose),
        Commands::Benchmark { count } => {
            run_benchmark_command(&dict, &cli.strategy, count);
            Ok(())
        }
    }
}

fn run_benchmark_command(dict: &Dictionary, strategy_name: &str, count: Option<usize>) {
    let targets = &dict.words()[..count.unwrap_or(dict.len()).min(dict.len())];
    println!(
        "Benchmarking {strategy_name} solver on {} words...",
        targets.len()
    );

    let strategy = StrategyKind::from_name(strategy_name);
    let solver = Solver::new(dict, strategy);
    let result = run_benchmark(&solver, targets);
    print_benchmark_result(&result);
}
