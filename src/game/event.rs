//! Input events accepted by the game

use serde::{Deserialize, Serialize};

/// A key forwarded from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A single letter, any case
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Parse a normalized key name: a single letter, `"backspace"` or `"enter"`
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::game::Key;
    ///
    /// assert_eq!(Key::parse("q"), Some(Key::Letter('Q')));
    /// assert_eq!(Key::parse("Enter"), Some(Key::Enter));
    /// assert_eq!(Key::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Some(Self::Letter(c.to_ascii_uppercase()))
            }
            _ if name.eq_ignore_ascii_case("enter") => Some(Self::Enter),
            _ if name.eq_ignore_ascii_case("backspace") => Some(Self::Backspace),
            _ => None,
        }
    }
}

/// How the answer of a new game is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewGameChoice {
    /// Same answer as today's daily game
    #[default]
    Daily,
    /// Uniformly random answer, independent of the date
    Random,
}

/// Everything the controller can be asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Key(Key),
    NewGame(NewGameChoice),
    /// Show or hide the answer; only honored when developer mode is enabled
    /// in the configuration
    ToggleDeveloperMode,
}

impl From<Key> for GameEvent {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}
