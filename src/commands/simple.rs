//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess or a command.

use crate::core::WORD_LENGTH;
use crate::game::{GameController, GameEvent, GameStatus, Key, MessageStyle, NewGameChoice};
use crate::output::{print_board, print_keyboard, print_statistics, share_text};
use crate::persistence::Storage;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, Write};

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineAction {
    Nothing,
    Quit,
    Help,
    Stats,
    Share,
    NewGame(NewGameChoice),
    Reveal,
    /// Letters to type into the current row before pressing Enter
    Guess(Vec<Key>),
    Invalid(&'static str),
}

/// Interpret one input line
///
/// An accepted five-letter word is always a guess, even when it spells a
/// command, so every answer stays playable. A leading `:` forces a command.
fn parse_line<W: WordSource + ?Sized>(line: &str, words: &W, developer: bool) -> LineAction {
    let line = line.trim();
    if line.is_empty() {
        return LineAction::Nothing;
    }

    let (forced, command) = match line.strip_prefix(':') {
        Some(rest) => (true, rest.trim()),
        None => (false, line),
    };

    if !forced && words.is_valid_guess(line) {
        return guess_keys(line);
    }

    match command.to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineAction::Quit,
        "help" | "?" => LineAction::Help,
        "stats" => LineAction::Stats,
        "share" => LineAction::Share,
        "new" | "new daily" => LineAction::NewGame(NewGameChoice::Daily),
        "new random" => LineAction::NewGame(NewGameChoice::Random),
        "reveal" if developer => LineAction::Reveal,
        _ if forced => LineAction::Invalid("Unknown command"),
        _ => guess_keys(line),
    }
}

fn guess_keys(word: &str) -> LineAction {
    let keys: Option<Vec<Key>> = word.chars().map(|c| Key::parse(&c.to_string())).collect();
    match keys {
        None => LineAction::Invalid("Letters only"),
        Some(keys) if keys.len() > WORD_LENGTH => LineAction::Invalid("Too many letters"),
        Some(keys) => LineAction::Guess(keys),
    }
}

/// Run the line-mode game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: WordSource, S: Storage>(
    controller: &mut GameController<W, S>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle Daily - Line Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in six tries. Type a word and press Enter.");
    println!("Commands: 'new', 'new random', 'stats', 'share', 'help', 'quit'");
    println!("(prefix a command with ':' if it is also a word, e.g. ':share')\n");

    if controller.was_restored() {
        println!("{}", "Resuming today's game.".bright_black());
    }
    show(controller);
    if controller.state().status().is_terminal() {
        print_game_over(controller);
    }

    loop {
        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let action = parse_line(
            &input,
            controller.words(),
            controller.developer_mode_allowed(),
        );
        match action {
            LineAction::Nothing => {}
            LineAction::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineAction::Help => print_help(controller.developer_mode_allowed()),
            LineAction::Stats => print_statistics(controller.statistics()),
            LineAction::Share => match share_text(controller.state(), controller.today()) {
                Some(text) => println!("\n{text}\n"),
                None => println!("Finish the game to share it.\n"),
            },
            LineAction::NewGame(choice) => {
                controller.handle(GameEvent::NewGame(choice));
                match choice {
                    NewGameChoice::Daily => println!("\n🔄 New game with today's word!"),
                    NewGameChoice::Random => println!("\n🔄 New game with a random word!"),
                }
                show(controller);
            }
            LineAction::Reveal => {
                controller.handle(GameEvent::ToggleDeveloperMode);
                show(controller);
            }
            LineAction::Invalid(reason) => println!("  {}\n", reason.red().bold()),
            LineAction::Guess(keys) => {
                if controller.state().status().is_terminal() {
                    println!("The game is over. Type 'new' or 'new random' to play again.\n");
                    continue;
                }
                submit_keys(controller, keys);
                show(controller);
                if controller.state().status().is_terminal() {
                    print_game_over(controller);
                }
            }
        }
    }
}

/// Replace the current row with `keys` and submit it
fn submit_keys<W: WordSource, S: Storage>(controller: &mut GameController<W, S>, keys: Vec<Key>) {
    for _ in 0..controller.state().current_col() {
        controller.handle(Key::Backspace.into());
    }
    for key in keys {
        controller.handle(key.into());
    }
    controller.handle(Key::Enter.into());
}

fn show<W: WordSource, S: Storage>(controller: &GameController<W, S>) {
    let state = controller.state();
    print_board(state);
    print_keyboard(state.key_hints());

    if let Some(message) = state.message() {
        let text = match message.style {
            MessageStyle::Success => message.text.green().bold(),
            MessageStyle::Error => message.text.red().bold(),
        };
        println!("  {text}\n");
    }
    if state.developer_mode() && !state.status().is_terminal() {
        println!("  {} {}\n", "[dev] answer:".magenta(), state.answer());
    }
}

fn print_game_over<W: WordSource, S: Storage>(controller: &GameController<W, S>) {
    let state = controller.state();
    println!("{}", "═".repeat(70).bright_cyan());
    match state.status() {
        GameStatus::Won => println!(
            "  {} Solved in {} {}",
            "🎉".bold(),
            state.attempts().to_string().bright_cyan().bold(),
            if state.attempts() == 1 { "guess" } else { "guesses" }
        ),
        GameStatus::Lost => println!("  The word was {}", state.answer().text().bright_yellow().bold()),
        GameStatus::Active => {}
    }
    println!("{}", "═".repeat(70).bright_cyan());
    if let Some(text) = share_text(state, controller.today()) {
        println!("\n{text}\n");
    }
    println!("Type 'new' for today's word again, 'new random' for another, or 'quit'.\n");
}

fn print_help(developer: bool) {
    println!("\n  🟩 letter in the right spot");
    println!("  🟨 letter in the word, wrong spot");
    println!("  ⬛ letter not in the word\n");
    println!("  new          restart with today's word");
    println!("  new random   play a random word");
    println!("  stats        show statistics");
    println!("  share        print the result grid");
    if developer {
        println!("  reveal       toggle showing the answer");
    }
    println!("  quit         leave the game");
    println!("  A word from the list is always played as a guess; use ':share' etc.");
    println!("  to run a command with the same spelling.\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
