//! Terminal output formatting
//!
//! Presentation lives here and in the commands; the core never prints.

pub mod display;

pub use display::{print_benchmark_result, print_solve_report, render_tiles};
