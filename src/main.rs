//! Wordle Daily - CLI
//!
//! Daily word game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use std::fs::File;
use std::path::PathBuf;
use wordle_daily::{
    commands::{run_simple, score_guess},
    config::Config,
    core::DayKey,
    game::GameController,
    output::{print_feedback, print_statistics},
    persistence::{FileStorage, load_statistics},
    wordlists::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file (one word per line); the built-in list by default
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for saved games and statistics
    #[arg(long, global = true, env = "WORDLE_DAILY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Allow revealing the answer (Ctrl-D in the TUI, 'reveal' in line mode)
    #[arg(long, global = true, env = "WORDLE_DAILY_DEVELOPER")]
    developer: bool,

    /// Write log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against an answer without playing
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Show lifetime statistics
    Stats,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config {
            wordlist: self.wordlist.clone(),
            developer: self.developer,
            log_file: self.log_file.clone(),
            ..Config::default()
        };
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        config
    }
}

/// Initialise the logger
///
/// Logs go to `--log-file` when given. Otherwise they go to stderr, except in
/// the TUI where stderr would corrupt the screen.
fn init_logging(config: &Config, tui: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .parse_default_env();

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if tui => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init()?;
    Ok(())
}

fn load_dictionary(config: &Config) -> Result<Dictionary> {
    match &config.wordlist {
        None => Ok(Dictionary::embedded()),
        Some(path) => {
            let answers = load_from_file(path)
                .with_context(|| format!("Cannot read word list {}", path.display()))?;
            info!("Loaded {} answers from {}", answers.len(), path.display());
            Ok(Dictionary::with_answers(answers)?)
        }
    }
}

fn controller(config: &Config) -> Result<GameController<Dictionary, FileStorage>> {
    let words = load_dictionary(config)?;
    let storage = FileStorage::new(&config.data_dir);
    Ok(GameController::load_or_new(words, storage, DayKey::today())
        .with_developer_mode(config.developer))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&config, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { guess, answer } => run_score_command(&config, &guess, &answer),
        Commands::Stats => {
            let storage = FileStorage::new(&config.data_dir);
            print_statistics(&load_statistics(&storage));
            Ok(())
        }
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(controller(config)?);
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut controller = controller(config)?;
    run_simple(&mut controller).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(config: &Config, guess: &str, answer: &str) -> Result<()> {
    let words = load_dictionary(config)?;
    let result = score_guess(guess, answer, &words).map_err(|e| anyhow::anyhow!(e))?;

    print_feedback(&result.guess, &result.feedback);
    if !result.accepted {
        println!("  (note: {} is not in the word list)\n", result.guess);
    }
    Ok(())
}
