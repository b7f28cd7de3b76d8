//! Core domain types
//!
//! Fundamental types for Wordle simulation: validated words, feedback
//! colors and patterns. Pure, allocation-light, and fully testable.

mod pattern;
mod word;

pub use pattern::{Color, NUM_PATTERNS, Pattern, is_consistent};
pub use word::{WORD_LENGTH, Word, WordError};
