//! Feedback pattern calculation and representation
//!
//! A pattern is one color per guessed letter position:
//! - Absent (`-`): letter not in the word
//! - Present (`Y`): letter in the word, wrong position
//! - Correct (`G`): letter in the correct position
//!
//! Patterns encode to a base-3 integer (0-242), where position i contributes
//! `color × 3^i`. The minimax solver uses the encoding for bucket indexing.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Number of distinct feedback patterns (3^5)
pub const NUM_PATTERNS: usize = 3usize.pow(WORD_LENGTH as u32);

/// Per-position feedback color
///
/// The discriminants are load-bearing: the base-3 pattern encoding assumes
/// Absent=0, Present=1, Correct=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Absent = 0,
    Present = 1,
    Correct = 2,
}

impl Color {
    /// The stable one-character display symbol: `G`, `Y`, or `-`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one guess against a hidden target
///
/// Produced only by [`Pattern::compute`]; immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    colors: [Color; WORD_LENGTH],
}

impl Pattern {
    /// All greens (exact match)
    pub const ALL_CORRECT: Self = Self {
        colors: [Color::Correct; WORD_LENGTH],
    };

    /// Compute the feedback for `guess` against `target`
    ///
    /// Two-pass algorithm with correct multiset semantics for duplicate
    /// letters: exact matches are reserved first, then each remaining guess
    /// letter is marked Present only while unmatched copies of it remain in
    /// the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::core::{Pattern, Word};
    ///
    /// let target = Word::new("SLATE").unwrap();
    /// let guess = Word::new("CRANE").unwrap();
    /// let pattern = Pattern::compute(&target, &guess);
    ///
    /// // C(-) R(-) A(G) N(-) E(G)
    /// assert_eq!(pattern.to_string(), "--G-G");
    /// ```
    #[must_use]
    pub fn compute(target: &Word, guess: &Word) -> Self {
        let mut colors = [Color::Absent; WORD_LENGTH];
        // Unmatched target letters, indexed by letter ordinal
        let mut unmatched = [0u8; 26];

        // First pass: exact matches; everything else feeds the unmatched pool
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == target.letter_at(i) {
                colors[i] = Color::Correct;
            } else {
                unmatched[usize::from(target.letter_at(i) - b'A')] += 1;
            }
        }

        // Second pass: mark Present while unmatched copies remain
        for i in 0..WORD_LENGTH {
            if colors[i] == Color::Correct {
                continue;
            }

            let slot = usize::from(guess.letter_at(i) - b'A');
            if unmatched[slot] > 0 {
                colors[i] = Color::Present;
                unmatched[slot] -= 1;
            }
        }

        Self { colors }
    }

    /// Get the per-position colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LENGTH] {
        &self.colors
    }

    /// Check if this is an exact match (all greens)
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Encode as a base-3 integer in `0..NUM_PATTERNS`
    ///
    /// Position i contributes `color × 3^i`, so the encoding is injective
    /// over patterns and usable as a bucket index.
    #[must_use]
    pub fn encode(self) -> usize {
        let mut value = 0;
        let mut multiplier = 1;
        for color in self.colors {
            value += color as usize * multiplier;
            multiplier *= 3;
        }
        value
    }

    /// Count the number of Correct positions
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.colors.iter().filter(|&&c| c == Color::Correct).count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.colors.iter().filter(|&&c| c == Color::Present).count()
    }
}

impl fmt::Display for Pattern {
    /// Render with the stable symbol mapping: Correct→`G`, Present→`Y`, Absent→`-`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.colors {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

/// Check whether `candidate` could still be the hidden target
///
/// True iff guessing `guess` against `candidate` would reproduce the
/// observed pattern. The solvers use this to filter their candidate pools.
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Word, guess: &Word, observed: Pattern) -> bool {
    Pattern::compute(candidate, guess) == observed
}
