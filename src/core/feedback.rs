//! Guess scoring
//!
//! A `Feedback` is the per-letter evaluation of one guess against the answer:
//! - `Correct` = letter in the correct position
//! - `Present` = letter in the word, wrong position
//! - `Absent` = letter not in the word (or already used up by other matches)

use super::{LetterEvaluation, WORD_LENGTH, Word};

/// Scored evaluation of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterEvaluation; WORD_LENGTH]);

impl Feedback {
    /// All letters in the correct position
    pub const PERFECT: Self = Self([LetterEvaluation::Correct; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// Duplicate letters are handled with remaining-count bookkeeping:
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches as correct and remove them from the pool
    /// 2. Second pass, left to right: mark present while the pool still holds
    ///    the letter, otherwise absent
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterEvaluation::*, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let answer = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     feedback.evaluations(),
    ///     &[Absent, Correct, Correct, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterEvaluation::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // First pass: exact position matches
        for (i, (g, a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = LetterEvaluation::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but the letter is still available
        for (i, letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterEvaluation::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                result[i] = LetterEvaluation::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter evaluations in guess order
    #[inline]
    #[must_use]
    pub const fn evaluations(&self) -> &[LetterEvaluation; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the letters in the correct position
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterEvaluation::Correct)
    }

    /// Count the letters present at another position
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterEvaluation::Present)
    }

    fn count(&self, wanted: LetterEvaluation) -> usize {
        self.0.iter().filter(|&&e| e == wanted).count()
    }

    /// Convert to a share-grid row like "⬛🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|e| e.emoji()).collect()
    }
}

impl From<Feedback> for [LetterEvaluation; WORD_LENGTH] {
    fn from(feedback: Feedback) -> Self {
        feedback.0
    }
}
