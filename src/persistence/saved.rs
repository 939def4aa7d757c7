//! Saved game and statistics records
//!
//! The game record mirrors the full state plus the day it belongs to. Loading
//! is forgiving: anything stale, unparsable or inconsistent is treated as "no
//! saved game".

use super::{PersistenceError, Storage};
use crate::core::{DayKey, KeyHints, LetterEvaluation, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::game::{GameState, GameStatus, GuessRow, Statistics};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Storage key of the current game
pub const GAME_KEY: &str = "game";

/// Storage key of the statistics record
pub const STATISTICS_KEY: &str = "statistics";

/// Persisted form of a `GameState`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    #[serde(default)]
    pub answer: Option<String>,
    /// Six rows of five cells; `""` for an empty cell
    pub guesses: Vec<Vec<String>>,
    pub evaluations: Vec<Vec<LetterEvaluation>>,
    pub current_row: usize,
    pub current_col: usize,
    pub status: GameStatus,
    #[serde(default)]
    pub key_states: KeyHints,
    #[serde(default)]
    pub developer_mode: bool,
    pub day_key: DayKey,
}

impl SavedGame {
    /// Snapshot `state` as belonging to `day`
    #[must_use]
    pub fn capture(state: &GameState, day: DayKey) -> Self {
        Self {
            answer: Some(state.answer().text().to_string()),
            guesses: state
                .rows()
                .iter()
                .map(|row| {
                    row.letters()
                        .iter()
                        .map(|cell| cell.map(String::from).unwrap_or_default())
                        .collect()
                })
                .collect(),
            evaluations: state
                .rows()
                .iter()
                .map(|row| row.evaluations().to_vec())
                .collect(),
            current_row: state.current_row(),
            current_col: state.current_col(),
            status: state.status(),
            key_states: state.key_hints().clone(),
            developer_mode: state.developer_mode(),
            day_key: day,
        }
    }

    /// Rebuild the game if this record belongs to `today` and is consistent
    ///
    /// # Errors
    /// Returns a short reason when the record must be discarded.
    pub fn restore(self, today: DayKey) -> Result<GameState, &'static str> {
        if self.day_key != today {
            return Err("saved game is from another day");
        }

        let answer = self.answer.ok_or("saved game has no answer")?;
        let answer = Word::new(answer).map_err(|_| "saved answer is not a word")?;

        if self.guesses.len() != MAX_ATTEMPTS || self.evaluations.len() != MAX_ATTEMPTS {
            return Err("saved grid has the wrong number of rows");
        }

        let mut rows: [GuessRow; MAX_ATTEMPTS] = Default::default();
        for ((row, letters), evaluations) in rows.iter_mut().zip(&self.guesses).zip(&self.evaluations)
        {
            if letters.len() != WORD_LENGTH {
                return Err("saved row has the wrong number of letters");
            }
            for (cell, text) in row.letters.iter_mut().zip(letters) {
                *cell = parse_cell(text)?;
            }
            row.evaluations = evaluations
                .as_slice()
                .try_into()
                .map_err(|_| "saved row has the wrong number of evaluations")?;
        }

        let mut state = GameState::new(answer);
        state.rows = rows;
        state.current_row = self.current_row;
        state.current_col = self.current_col;
        state.status = self.status;
        state.key_hints = self.key_states;
        state.developer_mode = self.developer_mode;

        state.check_invariants()?;
        state.message = state.outcome_message();
        Ok(state)
    }
}

fn parse_cell(text: &str) -> Result<Option<char>, &'static str> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_uppercase())),
        _ => Err("saved cell is not a single letter"),
    }
}

/// Load today's game, or `None` if there is no usable save
///
/// Read errors, parse errors, stale days and inconsistent grids are all
/// logged and reported as `None`.
pub fn load_game<S: Storage + ?Sized>(storage: &S, today: DayKey) -> Option<GameState> {
    let contents = match storage.read(GAME_KEY) {
        Ok(Some(contents)) => contents,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read saved game: {e}");
            return None;
        }
    };

    let saved: SavedGame = match serde_json::from_str(&contents) {
        Ok(saved) => saved,
        Err(e) => {
            debug!("Discarding unreadable saved game: {e}");
            return None;
        }
    };

    match saved.restore(today) {
        Ok(state) => Some(state),
        Err(reason) => {
            debug!("Discarding saved game: {reason}");
            None
        }
    }
}

/// Save `state` as today's game
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn save_game<S: Storage + ?Sized>(
    storage: &mut S,
    state: &GameState,
    day: DayKey,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(&SavedGame::capture(state, day))?;
    storage.write(GAME_KEY, &json)
}

/// Load statistics, defaulting to empty ones when missing or unreadable
pub fn load_statistics<S: Storage + ?Sized>(storage: &S) -> Statistics {
    match storage.read(STATISTICS_KEY) {
        Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Discarding unreadable statistics: {e}");
            Statistics::default()
        }),
        Ok(None) => Statistics::default(),
        Err(e) => {
            warn!("Could not read statistics: {e}");
            Statistics::default()
        }
    }
}

/// Save statistics
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn save_statistics<S: Storage + ?Sized>(
    storage: &mut S,
    stats: &Statistics,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string(stats)?;
    storage.write(STATISTICS_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Key;
    use crate::persistence::MemoryStorage;
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn today() -> DayKey {
        DayKey::from_ymd(2026, 10, 18).unwrap()
    }

    fn played_game() -> GameState {
        let words = Dictionary::new(words_from_slice(&["crane", "trace"]), &[]).unwrap();
        let mut state = GameState::new(Word::new("crane").unwrap());
        for c in "TRACE".chars() {
            state.handle(Key::Letter(c), &words);
        }
        state.handle(Key::Enter, &words);
        state.handle(Key::Letter('c'), &words);
        state.handle(Key::Letter('r'), &words);
        state
    }

    #[test]
    fn save_then_load_same_day() {
        let mut storage = MemoryStorage::new();
        let state = played_game();

        save_game(&mut storage, &state, today()).unwrap();
        let loaded = load_game(&storage, today()).unwrap();

        assert_eq!(loaded.rows(), state.rows());
        assert_eq!(loaded.current_row(), 1);
        assert_eq!(loaded.current_col(), 2);
        assert_eq!(loaded.key_hints(), state.key_hints());
        assert_eq!(loaded.answer(), state.answer());
    }

    #[test]
    fn persisted_field_names() {
        let saved = SavedGame::capture(&played_game(), today());
        let json = serde_json::to_value(&saved).unwrap();

        assert_eq!(json["answer"], "CRANE");
        assert_eq!(json["dayKey"], "2026-10-18");
        assert_eq!(json["currentRow"], 1);
        assert_eq!(json["currentCol"], 2);
        assert_eq!(json["status"], "active");
        assert_eq!(json["guesses"][0][0], "T");
        assert_eq!(json["guesses"][1][2], "");
        assert_eq!(json["evaluations"][0][1], "correct");
        assert_eq!(json["evaluations"][1][0], "empty");
        assert_eq!(json["keyStates"]["t"], "absent");
        assert_eq!(json["developerMode"], false);
    }

    fn finished_game(guesses: &[&str]) -> GameState {
        let words = Dictionary::new(
            words_from_slice(&["crane", "trace", "slate", "brine", "pious", "dumpy", "adieu"]),
            &[],
        )
        .unwrap();
        let mut state = GameState::new(Word::new("crane").unwrap());
        for guess in guesses {
            for c in guess.chars() {
                state.handle(Key::Letter(c), &words);
            }
            state.handle(Key::Enter, &words);
        }
        state
    }

    #[test]
    fn reload_of_lost_game_keeps_reveal() {
        let mut storage = MemoryStorage::new();
        let state = finished_game(&["trace", "slate", "brine", "pious", "dumpy", "adieu"]);
        assert_eq!(state.status(), GameStatus::Lost);

        save_game(&mut storage, &state, today()).unwrap();
        let loaded = load_game(&storage, today()).unwrap();

        assert_eq!(loaded.status(), GameStatus::Lost);
        assert_eq!(loaded.message(), state.message());
        assert_eq!(loaded.message().unwrap().text, "The word was CRANE");
    }

    #[test]
    fn reload_of_won_game_keeps_celebration() {
        let mut storage = MemoryStorage::new();
        let state = finished_game(&["trace", "crane"]);

        save_game(&mut storage, &state, today()).unwrap();
        let loaded = load_game(&storage, today()).unwrap();

        assert_eq!(loaded.status(), GameStatus::Won);
        assert_eq!(loaded.message().unwrap().text, "Magnificent");
    }

    #[test]
    fn reload_of_active_game_has_no_message() {
        let mut storage = MemoryStorage::new();
        save_game(&mut storage, &played_game(), today()).unwrap();
        assert!(load_game(&storage, today()).unwrap().message().is_none());
    }

    #[test]
    fn previous_day_is_discarded() {
        let mut storage = MemoryStorage::new();
        let yesterday = today().previous().unwrap();
        save_game(&mut storage, &played_game(), yesterday).unwrap();

        assert!(load_game(&storage, today()).is_none());
    }

    #[test]
    fn corrupt_json_is_discarded() {
        let mut storage = MemoryStorage::new();
        storage.write(GAME_KEY, "{not json").unwrap();
        assert!(load_game(&storage, today()).is_none());
    }

    #[test]
    fn missing_answer_is_discarded() {
        let mut storage = MemoryStorage::new();
        let mut saved = SavedGame::capture(&played_game(), today());
        saved.answer = None;
        storage
            .write(GAME_KEY, &serde_json::to_string(&saved).unwrap())
            .unwrap();

        assert!(load_game(&storage, today()).is_none());
    }

    #[test]
    fn inconsistent_grid_is_discarded() {
        let mut saved = SavedGame::capture(&played_game(), today());
        saved.current_col = 4;
        assert!(saved.clone().restore(today()).is_err());

        saved.current_col = 2;
        saved.guesses[3][0] = "QQ".into();
        assert!(saved.clone().restore(today()).is_err());

        saved.guesses[3][0] = String::new();
        saved.guesses.pop();
        assert!(saved.restore(today()).is_err());
    }

    #[test]
    fn developer_mode_defaults_off() {
        let mut json = serde_json::to_value(SavedGame::capture(&played_game(), today())).unwrap();
        json.as_object_mut().unwrap().remove("developerMode");

        let saved: SavedGame = serde_json::from_value(json).unwrap();
        assert!(!saved.developer_mode);
    }

    #[test]
    fn statistics_round_trip_and_fallback() {
        let mut storage = MemoryStorage::new();
        assert_eq!(load_statistics(&storage), Statistics::default());

        let mut stats = Statistics::default();
        stats.record(today(), GameStatus::Won, 2);
        save_statistics(&mut storage, &stats).unwrap();
        assert_eq!(load_statistics(&storage), stats);

        storage.write(STATISTICS_KEY, "garbage").unwrap();
        assert_eq!(load_statistics(&storage), Statistics::default());
    }
}
