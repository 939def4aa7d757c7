//! Colored line-mode output

use super::formatters::{KEYBOARD_ROWS, create_progress_bar};
use crate::core::{Feedback, KeyHints, LetterEvaluation, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::game::{GameState, Statistics};
use colored::{ColoredString, Colorize};

/// One letter styled by its evaluation
#[must_use]
pub fn colored_letter(letter: char, evaluation: LetterEvaluation) -> ColoredString {
    let text = format!(" {letter} ");
    match evaluation {
        LetterEvaluation::Correct => text.black().on_green().bold(),
        LetterEvaluation::Present => text.black().on_yellow().bold(),
        LetterEvaluation::Absent => text.white().on_bright_black(),
        LetterEvaluation::Filled => text.bright_white().bold(),
        LetterEvaluation::Empty => text.bright_black(),
    }
}

/// Print the whole grid, one row per line
pub fn print_board(state: &GameState) {
    println!();
    for row in 0..MAX_ATTEMPTS {
        let cells: Vec<String> = (0..WORD_LENGTH)
            .map(|col| {
                let tile = state.tile(row, col);
                colored_letter(tile.letter.unwrap_or('·'), tile.evaluation).to_string()
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
    println!();
}

/// Print the keyboard with each key colored by its hint
pub fn print_keyboard(hints: &KeyHints) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| {
                let evaluation = hints.get(c).unwrap_or(LetterEvaluation::Empty);
                match evaluation {
                    LetterEvaluation::Empty => c.to_string().white().to_string(),
                    scored => colored_letter(c, scored).to_string(),
                }
            })
            .collect();
        println!("{}{}", " ".repeat(indent * 2 + 2), keys.join(" "));
    }
    println!();
}

/// Print the evaluation of a single guess against an answer
pub fn print_feedback(guess: &Word, feedback: &Feedback) {
    let tiles: Vec<String> = guess
        .text()
        .chars()
        .zip(feedback.evaluations())
        .map(|(letter, &evaluation)| colored_letter(letter, evaluation).to_string())
        .collect();
    println!("\n  {}  {}", tiles.join(" "), feedback.to_emoji());
    println!(
        "  {} correct, {} present\n",
        feedback.count_correct().to_string().green().bold(),
        feedback.count_present().to_string().yellow().bold()
    );
}

/// Print lifetime statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.played);
    println!(
        "   Win %:           {}",
        stats.win_percentage().to_string().bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n   {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 24);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
    println!();
}
