//! Results of applying an event
//!
//! The presentation layer inspects these to decide on effects (shaking a
//! rejected row, revealing a scored one, ringing the bell on a win) without
//! the core knowing anything about them.

use super::{GameStatus, NewGameChoice};
use crate::core::Feedback;
use std::fmt;

/// Why a submitted row was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NotEnoughLetters,
    NotInWordList(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NotInWordList(_) => write!(f, "Word not in list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// What changed in response to one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing happened
    Ignored,
    LetterTyped {
        row: usize,
        col: usize,
        letter: char,
    },
    LetterErased {
        row: usize,
        col: usize,
    },
    /// Submission refused; the grid is untouched
    Rejected { row: usize, reason: SubmitError },
    /// A row was scored; `status` is the status after scoring
    RowScored {
        row: usize,
        feedback: Feedback,
        status: GameStatus,
    },
    NewGame(NewGameChoice),
    DeveloperMode(bool),
}

impl Transition {
    /// Whether the transition changed state that must be saved
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::Ignored | Self::Rejected { .. })
    }

    /// Whether the game ended with this transition
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(
            self,
            Self::RowScored {
                status: GameStatus::Won | GameStatus::Lost,
                ..
            }
        )
    }
}
