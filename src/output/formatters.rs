//! Formatting utilities shared by the terminal front ends

use crate::core::{DayKey, MAX_ATTEMPTS};
use crate::game::{GameState, GameStatus};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Spoiler-free summary of a finished game
///
/// Returns `None` while the game is still in progress.
///
/// ```text
/// Wordle Daily 2026-10-18 3/6
///
/// ⬛🟩🟩🟨🟩
/// ⬛🟩🟩⬛🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(state: &GameState, day: DayKey) -> Option<String> {
    let score = match state.status() {
        GameStatus::Active => return None,
        GameStatus::Won => state.attempts().to_string(),
        GameStatus::Lost => "X".to_string(),
    };

    let mut text = format!("Wordle Daily {day} {score}/{MAX_ATTEMPTS}");
    if state.developer_mode() {
        text.push('*');
    }
    text.push_str("\n\n");

    let grid: Vec<String> = state
        .rows()
        .iter()
        .filter(|row| row.is_scored())
        .map(|row| row.evaluations().iter().map(|e| e.emoji()).collect())
        .collect();
    text.push_str(&grid.join("\n"));

    Some(text)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
