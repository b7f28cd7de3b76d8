//! Minimax guess selection
//!
//! Scores every dictionary word by its worst-case split: the size of the
//! largest group of remaining candidates that would produce the same
//! feedback pattern if each were the true target. The guess minimizing that
//! score leaves the smallest guaranteed search space.

use super::pool::CandidatePool;
use super::strategy::Strategy;
use crate::core::{NUM_PATTERNS, Pattern, Word};
use crate::dict::Dictionary;

/// Worst-case split strategy
///
/// Scans the full dictionary (not just the pool) sequentially; the scan
/// order is part of the contract because it decides tie outcomes.
pub struct WorstCaseSplit;

/// Compute the worst-case split for a candidate guess
///
/// Buckets every remaining pool member by the base-3 encoding of the
/// feedback it would produce against `guess`, and returns the largest
/// bucket size. The bucket array is zeroed per call.
#[must_use]
pub fn worst_case_split(guess: &Word, dict: &Dictionary, pool: &CandidatePool) -> usize {
    let mut buckets = [0u32; NUM_PATTERNS];
    let mut worst = 0u32;

    for index in pool.indices() {
        let slot = Pattern::compute(dict.word(index), guess).encode();
        buckets[slot] += 1;
        worst = worst.max(buckets[slot]);
    }

    worst as usize
}

struct Best {
    index: usize,
    score: usize,
    /// Whether the guess is itself still a pool member
    eligible: bool,
}

impl Strategy for WorstCaseSplit {
    fn select_guess<'d>(&self, dict: &'d Dictionary, pool: &CandidatePool) -> Option<&'d Word> {
        if pool.is_empty() {
            return None;
        }

        // A lone candidate must be the answer; no scoring needed
        if pool.len() == 1 {
            return pool.first(dict);
        }

        let mut best: Option<Best> = None;

        for index in 0..dict.len() {
            let score = worst_case_split(dict.word(index), dict, pool);
            let eligible = pool.contains(index);

            if let Some(current) = &mut best {
                // Equal information with pool membership means the guess
                // could also be the answer outright: take the winning chance
                let improves = score < current.score;
                let wins_tie = score == current.score && eligible && !current.eligible;
                if improves || wins_tie {
                    *current = Best { index, score, eligible };
                }
            } else {
                best = Some(Best { index, score, eligible });
            }

            // A pool-eligible guess with worst case 1 cannot be improved on
            if let Some(current) = &best
                && current.score == 1
                && current.eligible
            {
                break;
            }
        }

        best.map(|b| dict.word(b.index))
    }
}
