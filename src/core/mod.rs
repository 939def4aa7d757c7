//! Core domain types for the game
//!
//! This module holds the word type, per-letter evaluations, the scoring
//! engine and the keyboard hint aggregator. Everything here is pure and has
//! no knowledge of the terminal or of storage.

mod day;
mod evaluation;
mod feedback;
mod hints;
mod word;

pub use day::DayKey;
pub use evaluation::LetterEvaluation;
pub use feedback::Feedback;
pub use hints::KeyHints;
pub use word::{Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Guesses per game
pub const MAX_ATTEMPTS: usize = 6;
