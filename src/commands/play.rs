//! Interactive manual game
//!
//! Plays one game against a random target on the terminal. Input
//! validation and re-prompting happen here; the game state machine only
//! ever sees well-formed dictionary words.

use crate::core::Word;
use crate::dict::Dictionary;
use crate::game::{Game, MAX_GUESSES};
use crate::output::render_tiles;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Run one interactive game against a random target
///
/// # Errors
/// Fails if the dictionary is empty or on terminal I/O errors.
pub fn run_play(dict: &Dictionary) -> Result<()> {
    let target = dict
        .random_word()
        .context("cannot start a game: word list is empty")?
        .clone();
    let mut game = Game::new(target);

    println!("Welcome to Wordle! Guess the 5-letter word.");
    println!("Green = correct, yellow = wrong position, gray = not in word.\n");

    while !game.is_finished() {
        let prompt = format!("Guess {}/{}", game.guesses().len() + 1, MAX_GUESSES);
        let input = read_input(&prompt)?;

        let Ok(word) = Word::new(&input) else {
            println!("Invalid word. Try again.");
            continue;
        };
        if !dict.contains(&word) {
            println!("Invalid word. Try again.");
            continue;
        }

        // Cannot fail: the loop condition guarantees the game is in progress
        if let Ok(feedback) = game.submit_guess(word.clone()) {
            println!("{}\n", render_tiles(&word, feedback));
        }
    }

    if game.is_won() {
        println!("Congratulations! You guessed the word: {}", game.target());
    } else {
        println!("Game over! The word was: {}", game.target());
    }

    Ok(())
}

/// Prompt and read one trimmed line from stdin
fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;

    Ok(input.trim().to_string())
}
