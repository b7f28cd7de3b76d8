//! Automated solving strategies
//!
//! Two solvers share one driver loop: consistency filtering (guess the
//! first surviving candidate) and minimax (minimize the worst-case split).

mod engine;
pub mod minimax;
mod pool;
mod strategy;

pub use engine::{
    STARTER_WORD, SolveOutcome, SolveReport, SolveStep, Solver, solve_consistency, solve_minimax,
};
pub use minimax::{WorstCaseSplit, worst_case_split};
pub use pool::CandidatePool;
pub use strategy::{FirstCandidate, Strategy, StrategyKind};
