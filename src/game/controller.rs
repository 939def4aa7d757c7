//! Single owner of the running game
//!
//! The controller holds the game state together with its collaborators (word
//! source, storage, statistics) and is the one place events enter the core.
//! Every mutation is saved before `handle` returns; save failures are logged
//! and never interrupt play.

use super::{GameEvent, GameState, NewGameChoice, Statistics, Transition};
use crate::core::DayKey;
use crate::persistence::{Storage, load_game, load_statistics, save_game, save_statistics};
use crate::wordlists::WordSource;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub struct GameController<W, S> {
    words: W,
    storage: S,
    today: DayKey,
    state: GameState,
    stats: Statistics,
    rng: StdRng,
    developer_allowed: bool,
    restored: bool,
}

impl<W: WordSource, S: Storage> GameController<W, S> {
    /// Resume today's saved game, or start today's daily game
    ///
    /// A save from another day, or one that cannot be read, is ignored.
    pub fn load_or_new(words: W, storage: S, today: DayKey) -> Self {
        let stats = load_statistics(&storage);
        let saved = load_game(&storage, today);
        let restored = saved.is_some();

        let state = saved.unwrap_or_else(|| {
            debug!("Starting daily game for {today}");
            GameState::new(words.answer_of_the_day(today))
        });

        let mut controller = Self {
            words,
            storage,
            today,
            state,
            stats,
            rng: StdRng::from_os_rng(),
            developer_allowed: false,
            restored,
        };

        if restored {
            info!(
                "Restored game for {today} at row {}",
                controller.state.current_row()
            );
        } else {
            controller.save();
        }
        controller
    }

    /// Allow the developer-mode toggle (answer reveal)
    #[must_use]
    pub fn with_developer_mode(mut self, allowed: bool) -> Self {
        self.developer_allowed = allowed;
        if !allowed && self.state.developer_mode() {
            self.state.set_developer_mode(false);
            self.save();
        }
        self
    }

    /// Replace the random source used for random new games
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn today(&self) -> DayKey {
        self.today
    }

    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Whether the current game was resumed from storage
    #[must_use]
    pub const fn was_restored(&self) -> bool {
        self.restored
    }

    #[must_use]
    pub const fn developer_mode_allowed(&self) -> bool {
        self.developer_allowed
    }

    /// Apply one event and persist the result
    pub fn handle(&mut self, event: GameEvent) -> Transition {
        let transition = match event {
            GameEvent::Key(key) => self.state.handle(key, &self.words),
            GameEvent::NewGame(choice) => self.new_game(choice),
            GameEvent::ToggleDeveloperMode => self.toggle_developer_mode(),
        };

        if transition.is_game_over() {
            self.stats
                .record(self.today, self.state.status(), self.state.attempts());
            info!(
                "Game over: {:?} in {} guesses",
                self.state.status(),
                self.state.attempts()
            );
            if let Err(e) = save_statistics(&mut self.storage, &self.stats) {
                warn!("Could not save statistics: {e}");
            }
        }

        if transition.is_mutation() {
            self.save();
        }

        transition
    }

    fn new_game(&mut self, choice: NewGameChoice) -> Transition {
        let answer = match choice {
            NewGameChoice::Daily => self.words.answer_of_the_day(self.today),
            NewGameChoice::Random => self.words.random_answer(&mut self.rng),
        };
        debug!("New {choice:?} game");

        let developer_mode = self.state.developer_mode();
        self.state = GameState::new(answer);
        self.state.set_developer_mode(developer_mode);
        self.restored = false;

        Transition::NewGame(choice)
    }

    fn toggle_developer_mode(&mut self) -> Transition {
        if !self.developer_allowed {
            debug!("Developer mode toggle ignored: not enabled");
            return Transition::Ignored;
        }
        let enabled = !self.state.developer_mode();
        self.state.set_developer_mode(enabled);
        Transition::DeveloperMode(enabled)
    }

    fn save(&mut self) {
        if let Err(e) = save_game(&mut self.storage, &self.state, self.today) {
            warn!("Could not save game: {e}");
        }
    }
}
