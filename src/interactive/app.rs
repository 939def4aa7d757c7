//! TUI application state and logic

use crate::game::{GameController, GameEvent, GameStatus, Key, NewGameChoice, Transition};
use crate::persistence::Storage;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Application state
pub struct App<W, S> {
    pub controller: GameController<W, S>,
    pub input_mode: InputMode,
    /// Result of the most recent event, used for visual feedback
    pub last_transition: Transition,
    pub should_quit: bool,
    /// Set on a win; the event loop rings the terminal bell and clears it
    pub bell: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// Asking whether the next game uses today's word or a random one
    NewGamePrompt,
    Statistics,
    GameOver,
}

impl<W: WordSource, S: Storage> App<W, S> {
    #[must_use]
    pub fn new(controller: GameController<W, S>) -> Self {
        let input_mode = if controller.state().status().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Playing
        };

        Self {
            controller,
            input_mode,
            last_transition: Transition::Ignored,
            should_quit: false,
            bell: false,
        }
    }

    /// Map one key press to game events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Playing => self.handle_playing_key(key),
            InputMode::NewGamePrompt => match key.code {
                KeyCode::Char('d' | 'D') => self.start_new_game(NewGameChoice::Daily),
                KeyCode::Char('r' | 'R') => self.start_new_game(NewGameChoice::Random),
                KeyCode::Esc => self.input_mode = self.resting_mode(),
                _ => {}
            },
            InputMode::Statistics => {
                // Any key closes the statistics panel
                self.input_mode = self.resting_mode();
            }
            InputMode::GameOver => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => {
                    self.input_mode = InputMode::NewGamePrompt;
                }
                KeyCode::Char('d' | 'D') => self.start_new_game(NewGameChoice::Daily),
                KeyCode::Char('r' | 'R') => self.start_new_game(NewGameChoice::Random),
                KeyCode::Char('s' | 'S') | KeyCode::Tab => self.input_mode = InputMode::Statistics,
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let event = match key.code {
            KeyCode::Char('n') if control => {
                self.input_mode = InputMode::NewGamePrompt;
                return;
            }
            KeyCode::Char('d') if control => GameEvent::ToggleDeveloperMode,
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.input_mode = InputMode::Statistics;
                return;
            }
            KeyCode::Char(c) if !control && c.is_ascii_alphabetic() => Key::Letter(c).into(),
            KeyCode::Backspace => Key::Backspace.into(),
            KeyCode::Enter => Key::Enter.into(),
            _ => return,
        };

        self.apply(event);
    }

    fn start_new_game(&mut self, choice: NewGameChoice) {
        self.apply(GameEvent::NewGame(choice));
        self.input_mode = InputMode::Playing;
    }

    fn apply(&mut self, event: GameEvent) {
        let transition = self.controller.handle(event);

        if transition.is_game_over() {
            self.input_mode = InputMode::GameOver;
            self.bell = self.controller.state().status() == GameStatus::Won;
        }

        if transition != Transition::Ignored {
            self.last_transition = transition;
        }
    }

    fn resting_mode(&self) -> InputMode {
        if self.controller.state().status().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Playing
        }
    }
}

/// Ring the bell through the terminal's own writer so it cannot split a frame
fn ring_bell<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(b"\x07")?;
    out.flush()
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, S: Storage>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, S>(terminal: &mut Terminal<B>, mut app: App<W, S>) -> Result<()>
where
    B: ratatui::backend::Backend + Write,
    W: WordSource,
    S: Storage,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if std::mem::take(&mut app.bell)
            && let Err(e) = ring_bell(terminal.backend_mut())
        {
            warn!("Could not ring terminal bell: {e}");
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
