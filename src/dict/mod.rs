//! Word dictionary
//!
//! An ordered list of valid 5-letter words. Load order is preserved and
//! meaningful: the solvers break ties by picking the first matching word,
//! so the same list must iterate identically to reproduce solver behavior.
//! Read-only after load.

use crate::core::Word;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Default word list compiled into the binary
const EMBEDDED_WORDS: &str = include_str!("../../data/words.txt");

/// An ordered set of 5-letter words with fast membership tests
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    members: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from words in iteration order
    ///
    /// Duplicates keep their first position and are not re-added.
    #[must_use]
    pub fn from_words<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut words = Vec::new();
        let mut members = FxHashSet::default();

        for word in iter {
            if members.insert(word.clone()) {
                words.push(word);
            }
        }

        Self { words, members }
    }

    /// Parse a word list from text, one word per line
    ///
    /// Lines are trimmed and case-normalized to uppercase. Lines that do
    /// not yield a valid 5-letter word are silently skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines().filter_map(|line| Word::new(line).ok()))
    }

    /// Load a word list from a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read. An empty result is
    /// not an error here; callers that need a non-empty dictionary must
    /// check [`Dictionary::is_empty`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// The default word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::parse(EMBEDDED_WORDS)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the word at a given index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// The first word in load order, if any
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Iterate words in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a uniformly random word, or `None` if the dictionary is empty
    #[must_use]
    pub fn random_word(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_and_preserves_order() {
        let dict = Dictionary::parse("crane\nSLATE\ntrace\n");

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.word(0).as_str(), "CRANE");
        assert_eq!(dict.word(1).as_str(), "SLATE");
        assert_eq!(dict.word(2).as_str(), "TRACE");
    }

    #[test]
    fn parse_skips_wrong_length_lines() {
        let dict = Dictionary::parse("crane\ntoolong\nabc\n\nslate\n");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.word(0).as_str(), "CRANE");
        assert_eq!(dict.word(1).as_str(), "SLATE");
    }

    #[test]
    fn parse_handles_carriage_returns() {
        let dict = Dictionary::parse("crane\r\nslate\r\n");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.word(0).as_str(), "CRANE");
    }

    #[test]
    fn parse_skips_non_alphabetic_lines() {
        let dict = Dictionary::parse("cran3\n# c_m\nslate\n");

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.word(0).as_str(), "SLATE");
    }

    #[test]
    fn duplicates_keep_first_position() {
        let dict = Dictionary::parse("crane\nslate\nCRANE\n");

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.word(0).as_str(), "CRANE");
    }

    #[test]
    fn contains_is_case_insensitive_via_word() {
        let dict = Dictionary::parse("crane\nslate\n");

        assert!(dict.contains(&Word::new("CRANE").unwrap()));
        assert!(dict.contains(&Word::new("crane").unwrap()));
        assert!(!dict.contains(&Word::new("trace").unwrap()));
    }

    #[test]
    fn random_word_none_when_empty() {
        let dict = Dictionary::parse("");
        assert!(dict.is_empty());
        assert!(dict.random_word().is_none());
    }

    #[test]
    fn random_word_comes_from_dictionary() {
        let dict = Dictionary::parse("crane\nslate\ntrace\n");
        let picked = dict.random_word().unwrap();
        assert!(dict.contains(picked));
    }

    #[test]
    fn embedded_list_is_nonempty_and_valid() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.contains(&Word::new("CRANE").unwrap()));
    }
}
