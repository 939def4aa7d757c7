//! Word source used by the game
//!
//! The game asks three things of its dictionary: is this guess accepted, what
//! is the answer for a given day, and give me a random answer.

use super::loader::words_from_slice;
use super::{ALLOWED, ANSWERS};
use crate::core::{DayKey, Word};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore, SeedableRng};
use rustc_hash::FxHashSet;
use std::fmt;

/// Dictionary contract required by the game state machine
pub trait WordSource {
    /// Whether `word` is an accepted five-letter guess (case-insensitive)
    fn is_valid_guess(&self, word: &str) -> bool;

    /// The answer for `day`; the same for every call with the same day
    fn answer_of_the_day(&self, day: DayKey) -> Word;

    /// A uniformly random answer, independent of the date
    fn random_answer(&self, rng: &mut dyn RngCore) -> Word;
}

/// Error building a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    NoAnswers,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list contains no valid five-letter words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// Answer pool plus accepted guesses
///
/// Every answer is also an accepted guess.
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    accepted: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an answer pool and extra accepted guesses
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, extra_guesses: &[Word]) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::NoAnswers);
        }

        let accepted = answers
            .iter()
            .chain(extra_guesses)
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self { answers, accepted })
    }

    /// Dictionary built from the lists compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded answer list is empty, which the build script
    /// rules out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED))
            .expect("embedded answer list is never empty")
    }

    /// Dictionary whose answers come from a custom list
    ///
    /// The embedded lists stay accepted as guesses.
    ///
    /// # Errors
    /// Returns `DictionaryError::NoAnswers` if `answers` is empty.
    pub fn with_answers(answers: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut extra = words_from_slice(ANSWERS);
        extra.extend(words_from_slice(ALLOWED));
        Self::new(answers, &extra)
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

}

impl WordSource for Dictionary {
    fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.accepted.contains(w.text()))
    }

    fn answer_of_the_day(&self, day: DayKey) -> Word {
        let mut rng = StdRng::seed_from_u64(day.day_number());
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }

    fn random_answer(&self, rng: &mut dyn RngCore) -> Word {
        // `new` guarantees at least one answer
        self.answers
            .choose(rng)
            .unwrap_or(&self.answers[0])
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn small() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "slate", "trace"]),
            &words_from_slice(&["adieu", "aahed"]),
        )
        .unwrap()
    }

    #[test]
    fn accepts_answers_and_extra_guesses() {
        let dict = small();
        assert!(dict.is_valid_guess("CRANE"));
        assert!(dict.is_valid_guess("adieu"));
        assert!(dict.is_valid_guess("AaHeD"));
        assert!(!dict.is_valid_guess("irate"));
    }

    #[test]
    fn rejects_unknown_and_malformed() {
        let dict = small();
        assert!(!dict.is_valid_guess("zzzzz"));
        assert!(!dict.is_valid_guess("cran"));
        assert!(!dict.is_valid_guess("cranes"));
        assert!(!dict.is_valid_guess(""));
    }

    #[test]
    fn empty_answer_list_rejected() {
        assert_eq!(
            Dictionary::new(Vec::new(), &[]).unwrap_err(),
            DictionaryError::NoAnswers
        );
    }

    #[test]
    fn answer_of_the_day_is_stable() {
        let dict = Dictionary::embedded();
        let day = DayKey::from_ymd(2026, 10, 18).unwrap();

        let first = dict.answer_of_the_day(day);
        for _ in 0..5 {
            assert_eq!(dict.answer_of_the_day(day), first);
        }
        assert!(dict.answers().contains(&first));
    }

    #[test]
    fn answer_of_the_day_varies_across_days() {
        let dict = Dictionary::embedded();
        let mut day = DayKey::from_ymd(2026, 10, 18).unwrap();
        let mut seen = FxHashSet::default();
        for _ in 0..30 {
            seen.insert(dict.answer_of_the_day(day));
            day = day.previous().unwrap();
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn random_answer_comes_from_answers() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = dict.random_answer(&mut rng);
            assert!(dict.answers().contains(&word));
        }
    }

    #[test]
    fn custom_answers_keep_embedded_guesses() {
        let dict = Dictionary::with_answers(words_from_slice(&["zesty"])).unwrap();
        assert!(dict.is_valid_guess("zesty"));
        assert!(dict.is_valid_guess("crane"));
        assert_eq!(dict.answers().len(), 1);
    }
}
