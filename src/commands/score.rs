//! Guess scoring command
//!
//! Scores one guess against a given answer without starting a game.

use crate::core::{Feedback, Word};
use crate::wordlists::WordSource;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
    /// Whether the game would accept the guess
    pub accepted: bool,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess<W: WordSource + ?Sized>(
    guess: &str,
    answer: &str,
    words: &W,
) -> Result<ScoreResult, String> {
    let guess_word = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer_word = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    let feedback = Feedback::calculate(&guess_word, &answer_word);
    let accepted = words.is_valid_guess(guess_word.text());

    Ok(ScoreResult {
        guess: guess_word,
        answer: answer_word,
        feedback,
        accepted,
    })
}
