//! Keyboard hint aggregation
//!
//! Tracks the best-known evaluation of every letter guessed so far, so the
//! on-screen keyboard can color its keys.

use super::LetterEvaluation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Best-known evaluation per letter, keyed by lowercase letter
///
/// Hints only ever move up the priority order (`Absent < Present < Correct`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyHints(BTreeMap<char, LetterEvaluation>);

impl KeyHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored row into the hints
    ///
    /// A hint is replaced only when the new evaluation has a strictly higher
    /// priority. Unscored evaluations and non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{KeyHints, LetterEvaluation::*};
    ///
    /// let mut hints = KeyHints::new();
    /// hints.update(['S', 'P', 'E', 'E', 'D'], [Present, Absent, Correct, Absent, Absent]);
    ///
    /// // The second E does not downgrade the first
    /// assert_eq!(hints.get('e'), Some(Correct));
    /// assert_eq!(hints.get('P'), Some(Absent));
    /// ```
    pub fn update<L, E>(&mut self, letters: L, evaluations: E)
    where
        L: IntoIterator<Item = char>,
        E: IntoIterator<Item = LetterEvaluation>,
    {
        for (letter, evaluation) in letters.into_iter().zip(evaluations) {
            if !evaluation.is_scored() || !letter.is_ascii_alphabetic() {
                continue;
            }
            let key = letter.to_ascii_lowercase();
            match self.0.get(&key) {
                Some(existing) if existing.priority() >= evaluation.priority() => {}
                _ => {
                    self.0.insert(key, evaluation);
                }
            }
        }
    }

    /// Hint for a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterEvaluation> {
        self.0.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Iterate over (lowercase letter, hint) pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterEvaluation)> + '_ {
        self.0.iter().map(|(&letter, &evaluation)| (letter, evaluation))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that every entry is a lowercase letter with a scored hint
    pub(crate) fn is_well_formed(&self) -> bool {
        self.0
            .iter()
            .all(|(letter, evaluation)| letter.is_ascii_lowercase() && evaluation.is_scored())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterEvaluation::{Absent, Correct, Empty, Filled, Present};
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn first_update_sets_hints() {
        let mut hints = KeyHints::new();
        hints.update(letters("CRANE"), [Absent, Correct, Present, Absent, Correct]);

        assert_eq!(hints.len(), 5);
        assert_eq!(hints.get('c'), Some(Absent));
        assert_eq!(hints.get('r'), Some(Correct));
        assert_eq!(hints.get('a'), Some(Present));
        assert_eq!(hints.get('z'), None);
    }

    #[test]
    fn hints_stored_lowercase() {
        let mut hints = KeyHints::new();
        hints.update(letters("CRANE"), [Absent; 5]);

        assert!(hints.iter().all(|(letter, _)| letter.is_ascii_lowercase()));
        assert!(hints.is_well_formed());
    }

    #[test]
    fn higher_priority_upgrades() {
        let mut hints = KeyHints::new();
        hints.update(letters("TRACE"), [Absent, Present, Absent, Absent, Absent]);
        hints.update(letters("BRINE"), [Absent, Correct, Absent, Absent, Absent]);

        assert_eq!(hints.get('r'), Some(Correct));
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut hints = KeyHints::new();
        hints.update(letters("CRANE"), [Correct; 5]);
        hints.update(letters("NACRE"), [Present, Present, Present, Present, Absent]);

        for letter in "crane".chars() {
            assert_eq!(hints.get(letter), Some(Correct), "{letter} was downgraded");
        }
    }

    #[test]
    fn present_is_not_downgraded_to_absent() {
        let mut hints = KeyHints::new();
        hints.update(letters("SPEED"), [Present, Absent, Present, Present, Absent]);
        hints.update(letters("EERIE"), [Absent, Absent, Absent, Absent, Absent]);

        assert_eq!(hints.get('e'), Some(Present));
    }

    #[test]
    fn update_is_idempotent() {
        let row = letters("SASSY");
        let evals = [Present, Present, Absent, Correct, Absent];

        let mut once = KeyHints::new();
        once.update(row.clone(), evals);

        let mut twice = once.clone();
        twice.update(row, evals);

        assert_eq!(once, twice);
    }

    #[test]
    fn unscored_evaluations_ignored() {
        let mut hints = KeyHints::new();
        hints.update(letters("CRANE"), [Empty, Filled, Empty, Filled, Empty]);
        assert!(hints.is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut hints = KeyHints::new();
        hints.update(letters("AB"), [Correct, Absent]);
        let json = serde_json::to_string(&hints).unwrap();
        assert_eq!(json, r#"{"a":"correct","b":"absent"}"#);
    }
}
