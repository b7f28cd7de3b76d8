//! Guess selection strategies
//!
//! Defines the Strategy trait and the consistency-filtering selection.

use super::minimax::WorstCaseSplit;
use super::pool::CandidatePool;
use crate::core::Word;
use crate::dict::Dictionary;

/// A strategy for selecting the next guess from the dictionary
///
/// The driver loop handles feedback and filtering; a strategy only decides
/// which word to try next given the surviving candidates.
pub trait Strategy {
    /// Select the next guess
    ///
    /// Returns `None` if no usable guess exists (empty pool or dictionary).
    fn select_guess<'d>(&self, dict: &'d Dictionary, pool: &CandidatePool) -> Option<&'d Word>;
}

/// Consistency-filtering selection
///
/// Guesses the first remaining candidate in dictionary load order. Cheap
/// and deterministic; the tie-break is the load order itself.
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess<'d>(&self, dict: &'d Dictionary, pool: &CandidatePool) -> Option<&'d Word> {
        pool.first(dict)
    }
}

/// Enum wrapper over the available strategies
///
/// Allows runtime selection while keeping static dispatch inside each arm.
pub enum StrategyKind {
    /// First consistent candidate in dictionary order
    Consistency(FirstCandidate),
    /// Worst-case-split minimization over the full dictionary
    Minimax(WorstCaseSplit),
}

impl StrategyKind {
    /// Create a strategy from its CLI name
    ///
    /// Supported names: "consistency", "minimax". Defaults to consistency
    /// if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" => Self::Minimax(WorstCaseSplit),
            _ => Self::Consistency(FirstCandidate),
        }
    }
}

impl Strategy for StrategyKind {
    fn select_guess<'d>(&self, dict: &'d Dictionary, pool: &CandidatePool) -> Option<&'d Word> {
        match self {
            Self::Consistency(s) => s.select_guess(dict, pool),
            Self::Minimax(s) => s.select_guess(dict, pool),
        }
    }
}
