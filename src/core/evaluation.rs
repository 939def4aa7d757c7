//! Per-letter evaluation states

use serde::{Deserialize, Serialize};

/// State of a single tile or keyboard key
///
/// `Empty` and `Filled` describe unscored tiles; the other three are scoring
/// outcomes and are ordered by hint priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterEvaluation {
    /// No letter entered
    #[default]
    Empty,
    /// Letter entered but not yet scored
    Filled,
    /// Letter not in the answer (or all its occurrences already accounted for)
    Absent,
    /// Letter in the answer at another position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterEvaluation {
    /// Priority used when merging keyboard hints (0 for unscored states)
    #[inline]
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Empty | Self::Filled => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Whether this is one of the three scoring outcomes
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        self.priority() > 0
    }

    /// Share-grid square for this evaluation
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty | Self::Filled => '⬜',
        }
    }
}
