//! Wordle Daily
//!
//! A daily five-letter word game: one answer per calendar day, six guesses,
//! duplicate-aware letter scoring, persisted progress and statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_daily::core::{Feedback, LetterEvaluation, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.evaluations()[1], LetterEvaluation::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Runtime configuration
pub mod config;

// Core domain types
pub mod core;

// Game state machine, controller and statistics
pub mod game;

// Saved games and statistics
pub mod persistence;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
