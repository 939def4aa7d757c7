//! Win/loss statistics across games

use super::GameStatus;
use crate::core::{DayKey, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub played: u32,
    pub won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of guesses; index 0 = solved in one
    pub guess_distribution: [u32; MAX_ATTEMPTS],
    pub last_completed: Option<DayKey>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// A win extends the streak when the previous finished game was on the
    /// same day or the day before; otherwise the streak restarts at one. A
    /// loss resets it. Active games are not recorded.
    pub fn record(&mut self, day: DayKey, status: GameStatus, attempts: usize) {
        match status {
            GameStatus::Active => return,
            GameStatus::Won => {
                self.won += 1;
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }

                let continues = self
                    .last_completed
                    .is_some_and(|last| last == day || Some(last) == day.previous());
                self.current_streak = if continues && self.current_streak > 0 {
                    self.current_streak + 1
                } else {
                    1
                };
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => self.current_streak = 0,
        }

        self.played += 1;
        self.last_completed = Some(day);
    }

    /// Percentage of games won, rounded down
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            self.won * 100 / self.played
        }
    }
}
