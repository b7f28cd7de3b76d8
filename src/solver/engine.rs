//! Solver driver
//!
//! Runs the shared round loop for any guess-selection strategy: simulate
//! feedback against the hidden target, filter the candidate pool, ask the
//! strategy for the next guess, repeat until solved or out of attempts.

use super::minimax::WorstCaseSplit;
use super::pool::CandidatePool;
use super::strategy::{FirstCandidate, Strategy};
use crate::core::{Pattern, Word};
use crate::dict::Dictionary;
use crate::game::MAX_GUESSES;

/// Fixed opening guess, used whenever the dictionary contains it
pub const STARTER_WORD: &str = "CRANE";

/// How a solver run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Target found within the attempt cap
    Solved,
    /// Attempt cap reached without success; a normal outcome, not an error
    OutOfGuesses,
    /// Filtering removed every candidate; only reachable with a target
    /// outside the dictionary (or a logic bug)
    NoCandidates,
}

/// One round of a solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveStep {
    pub guess: Word,
    pub feedback: Pattern,
    /// Candidates remaining after this guess's feedback was applied
    /// (1 for the winning guess)
    pub remaining: usize,
}

/// Full record of a solver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub target: Word,
    pub outcome: SolveOutcome,
    pub steps: Vec<SolveStep>,
}

impl SolveReport {
    /// Number of guesses used (partial count for early terminations)
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }
}

/// Solver coordinating the round loop for a given strategy
///
/// A run owns its candidate pool and touches nothing shared except the
/// read-only dictionary, so concurrent runs need no locking.
pub struct Solver<'d, S: Strategy> {
    dict: &'d Dictionary,
    strategy: S,
}

impl<'d, S: Strategy> Solver<'d, S> {
    pub const fn new(dict: &'d Dictionary, strategy: S) -> Self {
        Self { dict, strategy }
    }

    /// The opening guess: [`STARTER_WORD`] if the dictionary has it,
    /// otherwise the first dictionary word
    fn opening_guess(&self) -> Option<&'d Word> {
        let starter = Word::new(STARTER_WORD).ok()?;
        if self.dict.contains(&starter) {
            self.dict.iter().find(|w| **w == starter)
        } else {
            self.dict.first()
        }
    }

    /// Play up to [`MAX_GUESSES`] rounds against the hidden target
    ///
    /// The target is visible only to the feedback simulation, never to the
    /// strategy.
    #[must_use]
    pub fn solve(&self, target: &Word) -> SolveReport {
        let mut steps = Vec::new();
        let mut pool = CandidatePool::all(self.dict.len());

        let Some(opening) = self.opening_guess() else {
            return SolveReport {
                target: target.clone(),
                outcome: SolveOutcome::NoCandidates,
                steps,
            };
        };
        let mut guess = opening.clone();

        for _ in 0..MAX_GUESSES {
            let feedback = Pattern::compute(target, &guess);

            if feedback.is_all_correct() {
                steps.push(SolveStep {
                    guess,
                    feedback,
                    remaining: 1,
                });
                return SolveReport {
                    target: target.clone(),
                    outcome: SolveOutcome::Solved,
                    steps,
                };
            }

            let remaining = pool.filter(self.dict, &guess, feedback);
            steps.push(SolveStep {
                guess,
                feedback,
                remaining,
            });

            let Some(next) = self.strategy.select_guess(self.dict, &pool) else {
                return SolveReport {
                    target: target.clone(),
                    outcome: SolveOutcome::NoCandidates,
                    steps,
                };
            };
            guess = next.clone();
        }

        SolveReport {
            target: target.clone(),
            outcome: SolveOutcome::OutOfGuesses,
            steps,
        }
    }
}

/// Solve by guessing the first consistent candidate each round
#[must_use]
pub fn solve_consistency(target: &Word, dict: &Dictionary) -> SolveReport {
    Solver::new(dict, FirstCandidate).solve(target)
}

/// Solve by minimizing the worst-case candidate split each round
#[must_use]
pub fn solve_minimax(target: &Word, dict: &Dictionary) -> SolveReport {
    Solver::new(dict, WorstCaseSplit).solve(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn starter_word_solved_in_one() {
        let dict = Dictionary::parse("crane\nslate\ntrace\n");
        let report = solve_consistency(&word("CRANE"), &dict);

        assert_eq!(report.outcome, SolveOutcome::Solved);
        assert_eq!(report.attempts(), 1);
        assert_eq!(report.steps[0].guess.as_str(), "CRANE");
        assert_eq!(report.steps[0].feedback.to_string(), "GGGGG");
    }

    #[test]
    fn opening_falls_back_to_first_word() {
        let dict = Dictionary::parse("slate\ntrace\n");
        let report = solve_consistency(&word("SLATE"), &dict);

        assert_eq!(report.steps[0].guess.as_str(), "SLATE");
        assert!(report.is_solved());
    }

    #[test]
    fn consistency_narrows_to_target() {
        let dict = Dictionary::parse("crane\nslate\ntrace\n");
        let report = solve_consistency(&word("TRACE"), &dict);

        assert_eq!(report.outcome, SolveOutcome::Solved);
        assert_eq!(report.attempts(), 2);
        assert_eq!(report.steps[1].guess.as_str(), "TRACE");
    }

    #[test]
    fn minimax_solves_same_scenario() {
        let dict = Dictionary::parse("crane\nslate\ntrace\n");
        let report = solve_minimax(&word("TRACE"), &dict);

        assert_eq!(report.outcome, SolveOutcome::Solved);
        assert!(report.attempts() <= 3);
    }

    #[test]
    fn remaining_counts_never_increase() {
        let dict = Dictionary::parse("crane\nslate\ntrace\ngrate\nirate\ncrate\nbrace\n");
        let report = solve_consistency(&word("BRACE"), &dict);

        for window in report.steps.windows(2) {
            assert!(window[1].remaining <= window[0].remaining);
        }
        assert!(report.is_solved());
    }

    #[test]
    fn off_dictionary_target_empties_pool() {
        let dict = Dictionary::parse("aaaaa\n");
        let report = solve_consistency(&word("BBBBB"), &dict);

        assert_eq!(report.outcome, SolveOutcome::NoCandidates);
        assert_eq!(report.attempts(), 1);
    }

    #[test]
    fn out_of_guesses_when_words_barely_differ() {
        // Seven words differing only in the last letter: each round can
        // eliminate only the guessed word, so the cap is reached
        let dict = Dictionary::parse("aaaab\naaaac\naaaad\naaaae\naaaaf\naaaag\naaaah\n");
        let report = solve_consistency(&word("AAAAH"), &dict);

        assert_eq!(report.outcome, SolveOutcome::OutOfGuesses);
        assert_eq!(report.attempts(), MAX_GUESSES);
    }

    #[test]
    fn minimax_run_is_reproducible() {
        let dict = Dictionary::parse("crane\nslate\ntrace\ngrate\nirate\ncrate\n");
        let first = solve_minimax(&word("GRATE"), &dict);
        let second = solve_minimax(&word("GRATE"), &dict);

        assert_eq!(first, second);
    }

    #[test]
    fn empty_dictionary_reports_no_candidates() {
        let dict = Dictionary::parse("");
        let report = solve_consistency(&word("CRANE"), &dict);

        assert_eq!(report.outcome, SolveOutcome::NoCandidates);
        assert_eq!(report.attempts(), 0);
    }
}
