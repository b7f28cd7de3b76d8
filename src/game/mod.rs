//! Game state machine
//!
//! Tracks one play-through: the hidden target, the guess history, and the
//! win/loss status. The only mutating operation is [`Game::submit_guess`];
//! once the game is won or lost, further submissions are rejected without
//! touching state.

use crate::core::{Pattern, Word};
use std::fmt;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// A guessed word paired with its feedback
///
/// Appended in guess order, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Pattern,
}

impl GuessRecord {
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Pattern {
        self.feedback
    }
}

/// Game progress state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already reached a terminal state
    Finished,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "Game is already finished"),
        }
    }
}

impl std::error::Error for GameError {}

/// One Wordle play-through
///
/// Target length validity is carried by the [`Word`] type, so a `Game`
/// can only be created with a well-formed target.
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    guesses: Vec<GuessRecord>,
    status: GameStatus,
}

impl Game {
    /// Start a new game with the given target
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            guesses: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::InProgress,
        }
    }

    /// Submit a guess and receive its feedback
    ///
    /// Transitions to `Won` on an exact match, to `Lost` when the final
    /// allowed attempt misses, and stays `InProgress` otherwise.
    ///
    /// # Errors
    /// Returns `GameError::Finished` if the game already reached a terminal
    /// state; the history is left unchanged.
    pub fn submit_guess(&mut self, word: Word) -> Result<Pattern, GameError> {
        if self.status != GameStatus::InProgress || self.guesses.len() >= MAX_GUESSES {
            return Err(GameError::Finished);
        }

        let feedback = Pattern::compute(&self.target, &word);

        if word == self.target {
            self.status = GameStatus::Won;
        } else if self.guesses.len() + 1 >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        self.guesses.push(GuessRecord { word, feedback });
        Ok(feedback)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guess records in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// True once the game reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn new_game_starts_in_progress() {
        let game = Game::new(word("CRANE"));
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.guesses().is_empty());
        assert!(!game.is_finished());
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut game = Game::new(word("CRANE"));
        let feedback = game.submit_guess(word("CRANE")).unwrap();

        assert!(feedback.is_all_correct());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(game.is_won());
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn wrong_guess_stays_in_progress() {
        let mut game = Game::new(word("CRANE"));
        let feedback = game.submit_guess(word("SLATE")).unwrap();

        assert!(!feedback.is_all_correct());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn sixth_miss_transitions_to_lost() {
        let mut game = Game::new(word("CRANE"));
        for _ in 0..MAX_GUESSES {
            game.submit_guess(word("SLATE")).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_finished());
        assert!(!game.is_won());
        assert_eq!(game.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn win_on_final_attempt() {
        let mut game = Game::new(word("CRANE"));
        for _ in 0..MAX_GUESSES - 1 {
            game.submit_guess(word("SLATE")).unwrap();
        }
        game.submit_guess(word("CRANE")).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn guesses_rejected_after_win_without_mutation() {
        let mut game = Game::new(word("CRANE"));
        game.submit_guess(word("CRANE")).unwrap();

        let before = game.guesses().to_vec();
        assert_eq!(game.submit_guess(word("SLATE")), Err(GameError::Finished));
        assert_eq!(game.guesses(), &before[..]);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn seventh_guess_rejected_without_mutation() {
        let mut game = Game::new(word("CRANE"));
        for _ in 0..MAX_GUESSES {
            game.submit_guess(word("SLATE")).unwrap();
        }

        let before = game.guesses().to_vec();
        let status_before = game.status();

        assert_eq!(game.submit_guess(word("TRACE")), Err(GameError::Finished));
        assert_eq!(game.guesses(), &before[..]);
        assert_eq!(game.status(), status_before);
    }

    #[test]
    fn records_keep_word_and_feedback() {
        let mut game = Game::new(word("CRANE"));
        game.submit_guess(word("SLATE")).unwrap();

        let record = &game.guesses()[0];
        assert_eq!(record.word().as_str(), "SLATE");
        assert_eq!(record.feedback().to_string(), "--G-G");
    }
}
