//! Word lists and the game's word source
//!
//! The lists under `data/` are compiled into the binary by the build script.
//! `Dictionary` wraps them behind the `WordSource` trait the game consumes.

pub mod loader;
mod source;

pub use source::{Dictionary, DictionaryError, WordSource};

// Generated by build.rs: ANSWERS, ANSWERS_COUNT, ALLOWED, ALLOWED_COUNT
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn lists_hold_uppercase_five_letter_words() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn answers_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn common_openers_are_accepted() {
        let dict = Dictionary::embedded();
        for word in ["crane", "slate", "adieu", "audio", "trace"] {
            assert!(dict.is_valid_guess(word), "{word} should be accepted");
        }
    }
}
