//! Wordle Simulator
//!
//! A five-letter word-guessing game simulator with two automated solvers:
//! consistency filtering and worst-case minimax.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sim::core::{Pattern, Word};
//! use wordle_sim::dict::Dictionary;
//! use wordle_sim::solver::solve_consistency;
//!
//! let target = Word::new("slate").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! // Feedback for one guess
//! let pattern = Pattern::compute(&target, &guess);
//! assert_eq!(pattern.to_string(), "--G-G");
//!
//! // Let a solver play a full game
//! let dict = Dictionary::parse("crane\nslate\ntrace\n");
//! let report = solve_consistency(&target, &dict);
//! assert!(report.is_solved());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word dictionary
pub mod dict;

// Solving strategies
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
