//! Candidate pool
//!
//! A per-run boolean mask over dictionary indices marking which words are
//! still consistent with all feedback seen so far. The pool only ever
//! shrinks; each solver run owns its own pool, so runs are independent.

use crate::core::{Pattern, Word, is_consistent};
use crate::dict::Dictionary;

/// The shrinking set of words still consistent with observed feedback
#[derive(Debug, Clone)]
pub struct CandidatePool {
    possible: Vec<bool>,
    remaining: usize,
}

impl CandidatePool {
    /// Start with every dictionary word possible
    #[must_use]
    pub fn all(size: usize) -> Self {
        Self {
            possible: vec![true; size],
            remaining: size,
        }
    }

    /// Number of candidates still possible
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the word at `index` is still possible
    #[inline]
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.possible.get(index).copied().unwrap_or(false)
    }

    /// Drop every candidate inconsistent with the observed feedback
    ///
    /// Returns the number of candidates remaining afterwards.
    pub fn filter(&mut self, dict: &Dictionary, guess: &Word, observed: Pattern) -> usize {
        for (index, flag) in self.possible.iter_mut().enumerate() {
            if *flag && !is_consistent(dict.word(index), guess, observed) {
                *flag = false;
                self.remaining -= 1;
            }
        }
        self.remaining
    }

    /// Indices of remaining candidates in dictionary order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.possible
            .iter()
            .enumerate()
            .filter_map(|(index, &flag)| flag.then_some(index))
    }

    /// The first remaining candidate in dictionary order
    #[must_use]
    pub fn first<'d>(&self, dict: &'d Dictionary) -> Option<&'d Word> {
        self.indices().next().map(|index| dict.word(index))
    }
}
