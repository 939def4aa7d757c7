//! Game state and its transition rules

use super::{Key, SubmitError, Transition};
use crate::core::{Feedback, KeyHints, LetterEvaluation, MAX_ATTEMPTS, WORD_LENGTH, Word};
use crate::wordlists::WordSource;
use serde::{Deserialize, Serialize};

/// Overall game status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Success,
    Error,
}

/// Human-readable status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

impl Message {
    fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One row of the grid: letters typed so far and their evaluations
///
/// Evaluations stay `Empty` until the row is submitted and scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRow {
    pub(crate) letters: [Option<char>; WORD_LENGTH],
    pub(crate) evaluations: [LetterEvaluation; WORD_LENGTH],
}

impl GuessRow {
    #[must_use]
    pub const fn letters(&self) -> &[Option<char>; WORD_LENGTH] {
        &self.letters
    }

    #[must_use]
    pub const fn evaluations(&self) -> &[LetterEvaluation; WORD_LENGTH] {
        &self.evaluations
    }

    /// Letters joined into a string, skipping empty cells
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().flatten().collect()
    }

    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.evaluations.iter().all(|e| e.is_scored())
    }

    fn is_blank(&self) -> bool {
        self.letters.iter().all(Option::is_none)
            && self.evaluations.iter().all(|&e| e == LetterEvaluation::Empty)
    }
}

/// What a single grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub evaluation: LetterEvaluation,
}

/// Complete state of one game
///
/// Owned by a single controller; `handle` is the only way gameplay mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) answer: Word,
    pub(crate) rows: [GuessRow; MAX_ATTEMPTS],
    pub(crate) current_row: usize,
    pub(crate) current_col: usize,
    pub(crate) status: GameStatus,
    pub(crate) key_hints: KeyHints,
    pub(crate) developer_mode: bool,
    pub(crate) message: Option<Message>,
}

impl GameState {
    /// Fresh game with an empty grid
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            rows: Default::default(),
            current_row: 0,
            current_col: 0,
            status: GameStatus::Active,
            key_hints: KeyHints::new(),
            developer_mode: false,
            message: None,
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; MAX_ATTEMPTS] {
        &self.rows
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn key_hints(&self) -> &KeyHints {
        &self.key_hints
    }

    #[must_use]
    pub const fn developer_mode(&self) -> bool {
        self.developer_mode
    }

    #[must_use]
    pub const fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Number of rows scored so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.iter().filter(|row| row.is_scored()).count()
    }

    /// The answer, if the player may see it (game over or developer mode)
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        (self.status.is_terminal() || self.developer_mode).then_some(&self.answer)
    }

    /// Cell contents for display; typed but unscored letters show as `Filled`
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        let cells = &self.rows[row];
        let letter = cells.letters[col];
        let evaluation = match (letter, cells.evaluations[col]) {
            (Some(_), LetterEvaluation::Empty) => LetterEvaluation::Filled,
            (_, evaluation) => evaluation,
        };
        Tile { letter, evaluation }
    }

    /// Celebration after a win, the answer after a loss
    pub(crate) fn outcome_message(&self) -> Option<Message> {
        match self.status {
            GameStatus::Active => None,
            GameStatus::Won => Some(Message::new(
                celebration(self.attempts()),
                MessageStyle::Success,
            )),
            GameStatus::Lost => Some(Message::new(
                format!("The word was {}", self.answer),
                MessageStyle::Error,
            )),
        }
    }

    pub(crate) fn set_developer_mode(&mut self, enabled: bool) {
        self.developer_mode = enabled;
    }

    /// Apply one key to the game
    ///
    /// Rejected submissions only change the status message. Once the game is
    /// won or lost every key is ignored.
    pub fn handle<W: WordSource + ?Sized>(&mut self, key: Key, words: &W) -> Transition {
        if self.status.is_terminal() {
            return Transition::Ignored;
        }

        match key {
            Key::Letter(letter) => self.type_letter(letter),
            Key::Backspace => self.erase(),
            Key::Enter => self.submit(words),
        }
    }

    fn type_letter(&mut self, letter: char) -> Transition {
        if self.current_col == WORD_LENGTH || !letter.is_ascii_alphabetic() {
            return Transition::Ignored;
        }

        let (row, col) = (self.current_row, self.current_col);
        let letter = letter.to_ascii_uppercase();
        self.rows[row].letters[col] = Some(letter);
        self.current_col += 1;
        self.message = None;

        Transition::LetterTyped { row, col, letter }
    }

    fn erase(&mut self) -> Transition {
        if self.current_col == 0 {
            return Transition::Ignored;
        }

        self.current_col -= 1;
        let (row, col) = (self.current_row, self.current_col);
        self.rows[row].letters[col] = None;
        self.message = None;

        Transition::LetterErased { row, col }
    }

    fn submit<W: WordSource + ?Sized>(&mut self, words: &W) -> Transition {
        let row = self.current_row;

        if self.current_col < WORD_LENGTH {
            return self.reject(SubmitError::NotEnoughLetters);
        }

        let candidate = self.rows[row].word();
        if !words.is_valid_guess(&candidate) {
            return self.reject(SubmitError::NotInWordList(candidate));
        }

        let Ok(guess) = Word::new(&candidate) else {
            // Accepted by the word source but not five ASCII letters
            return self.reject(SubmitError::NotInWordList(candidate));
        };

        let feedback = Feedback::calculate(&guess, &self.answer);
        self.rows[row].evaluations = *feedback.evaluations();
        self.key_hints
            .update(self.rows[row].letters.iter().flatten().copied(), *feedback.evaluations());

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
            self.message = self.outcome_message();
        } else if row + 1 == MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            self.message = self.outcome_message();
        } else {
            self.current_row += 1;
            self.current_col = 0;
            self.message = None;
        }

        Transition::RowScored {
            row,
            feedback,
            status: self.status,
        }
    }

    fn reject(&mut self, reason: SubmitError) -> Transition {
        self.message = Some(Message::new(reason.to_string(), MessageStyle::Error));
        Transition::Rejected {
            row: self.current_row,
            reason,
        }
    }

    /// Check the grid invariants
    ///
    /// Rows before the cursor are scored, rows after it are blank, and the
    /// cursor row holds exactly `current_col` leading letters while active.
    ///
    /// # Errors
    /// Returns a short description of the first violated invariant.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.current_row >= MAX_ATTEMPTS {
            return Err("current row out of range");
        }
        if self.current_col > WORD_LENGTH {
            return Err("current column out of range");
        }
        if !self.key_hints.is_well_formed() {
            return Err("malformed keyboard hints");
        }

        for row in &self.rows[..self.current_row] {
            if !row.is_scored() || row.letters.iter().any(Option::is_none) {
                return Err("row before the cursor is not scored");
            }
        }
        if !self.rows[self.current_row + 1..].iter().all(GuessRow::is_blank) {
            return Err("row after the cursor is not blank");
        }

        let current = &self.rows[self.current_row];
        match self.status {
            GameStatus::Active => {
                let (filled, empty) = current.letters.split_at(self.current_col);
                if !filled.iter().all(Option::is_some) || !empty.iter().all(Option::is_none) {
                    return Err("cursor row letters do not match the column");
                }
                if current.evaluations.iter().any(|&e| e != LetterEvaluation::Empty) {
                    return Err("cursor row is scored while active");
                }
            }
            GameStatus::Won | GameStatus::Lost => {
                if self.current_col != WORD_LENGTH || !current.is_scored() {
                    return Err("final row is not scored");
                }
                let perfect = current
                    .evaluations
                    .iter()
                    .all(|&e| e == LetterEvaluation::Correct);
                match self.status {
                    GameStatus::Won if !perfect => return Err("won without a perfect row"),
                    GameStatus::Lost if perfect || self.current_row + 1 != MAX_ATTEMPTS => {
                        return Err("lost before the last row");
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}

/// Win message by number of guesses used
fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "Genius",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        _ => "Phew",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterEvaluation::{Absent, Correct, Present};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "trace", "slate", "brine", "pious", "dumpy"]),
            &words_from_slice(&["adieu", "lymph", "fjord"]),
        )
        .unwrap()
    }

    fn game() -> GameState {
        GameState::new(Word::new("crane").unwrap())
    }

    fn type_word(state: &mut GameState, word: &str, words: &Dictionary) {
        for c in word.chars() {
            state.handle(Key::Letter(c), words);
        }
    }

    fn guess(state: &mut GameState, word: &str, words: &Dictionary) -> Transition {
        type_word(state, word, words);
        state.handle(Key::Enter, words)
    }

    #[test]
    fn new_game_is_blank_and_valid() {
        let state = game();
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!((state.current_row(), state.current_col()), (0, 0));
        assert!(state.rows().iter().all(GuessRow::is_blank));
        assert!(state.key_hints().is_empty());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn letters_fill_row_uppercase() {
        let words = dictionary();
        let mut state = game();

        let t = state.handle(Key::Letter('c'), &words);
        assert_eq!(
            t,
            Transition::LetterTyped {
                row: 0,
                col: 0,
                letter: 'C'
            }
        );
        assert_eq!(state.current_col(), 1);
        assert_eq!(state.tile(0, 0).letter, Some('C'));
        assert_eq!(state.tile(0, 0).evaluation, LetterEvaluation::Filled);
        assert_eq!(state.tile(0, 1).evaluation, LetterEvaluation::Empty);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn sixth_letter_ignored() {
        let words = dictionary();
        let mut state = game();
        type_word(&mut state, "crane", &words);

        assert_eq!(state.handle(Key::Letter('S'), &words), Transition::Ignored);
        assert_eq!(state.current_col(), 5);
        assert_eq!(state.rows()[0].word(), "CRANE");
    }

    #[test]
    fn non_letters_ignored() {
        let words = dictionary();
        let mut state = game();
        assert_eq!(state.handle(Key::Letter('1'), &words), Transition::Ignored);
        assert_eq!(state.current_col(), 0);
    }

    #[test]
    fn backspace_clears_last_letter() {
        let words = dictionary();
        let mut state = game();
        type_word(&mut state, "cr", &words);

        let t = state.handle(Key::Backspace, &words);
        assert_eq!(t, Transition::LetterErased { row: 0, col: 1 });
        assert_eq!(state.current_col(), 1);
        assert_eq!(state.rows()[0].letters()[1], None);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn backspace_on_empty_row_ignored() {
        let words = dictionary();
        let mut state = game();
        assert_eq!(state.handle(Key::Backspace, &words), Transition::Ignored);
    }

    #[test]
    fn short_row_rejected_without_advancing() {
        let words = dictionary();
        let mut state = game();
        type_word(&mut state, "cra", &words);
        let before = state.rows().clone();

        let t = state.handle(Key::Enter, &words);
        assert_eq!(
            t,
            Transition::Rejected {
                row: 0,
                reason: SubmitError::NotEnoughLetters
            }
        );
        assert_eq!(state.message().unwrap().text, "Not enough letters");
        assert_eq!((state.current_row(), state.current_col()), (0, 3));
        assert_eq!(state.rows(), &before);
    }

    #[test]
    fn unknown_word_rejected_and_row_kept() {
        let words = dictionary();
        let mut state = game();
        type_word(&mut state, "qqqqq", &words);

        let t = state.handle(Key::Enter, &words);
        assert!(matches!(
            t,
            Transition::Rejected {
                reason: SubmitError::NotInWordList(ref w),
                ..
            } if w == "QQQQQ"
        ));
        assert_eq!(state.message().unwrap().text, "Word not in list");
        assert_eq!(state.rows()[0].word(), "QQQQQ");
        assert_eq!((state.current_row(), state.current_col()), (0, 5));
        assert!(state.key_hints().is_empty());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn typing_after_rejection_clears_message() {
        let words = dictionary();
        let mut state = game();
        state.handle(Key::Enter, &words);
        assert!(state.message().is_some());

        state.handle(Key::Letter('a'), &words);
        assert!(state.message().is_none());
    }

    #[test]
    fn correct_guess_wins_on_first_row() {
        let words = dictionary();
        let mut state = game();

        let t = guess(&mut state, "crane", &words);
        assert_eq!(
            t,
            Transition::RowScored {
                row: 0,
                feedback: Feedback::PERFECT,
                status: GameStatus::Won
            }
        );
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.rows()[0].evaluations(), &[Correct; 5]);
        assert_eq!(state.message().unwrap().text, "Genius");
        assert_eq!(state.message().unwrap().style, MessageStyle::Success);
        assert_eq!(state.attempts(), 1);
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn valid_miss_advances_row() {
        let words = dictionary();
        let mut state = game();

        let t = guess(&mut state, "trace", &words);
        assert!(matches!(
            t,
            Transition::RowScored {
                row: 0,
                status: GameStatus::Active,
                ..
            }
        ));
        assert_eq!(
            state.rows()[0].evaluations(),
            &[Absent, Correct, Correct, Present, Correct]
        );
        assert_eq!((state.current_row(), state.current_col()), (1, 0));
        assert_eq!(state.key_hints().get('t'), Some(Absent));
        assert_eq!(state.key_hints().get('c'), Some(Present));
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn prior_rows_are_frozen() {
        let words = dictionary();
        let mut state = game();
        guess(&mut state, "trace", &words);
        let first_row = state.rows()[0].clone();

        type_word(&mut state, "sla", &words);
        state.handle(Key::Backspace, &words);
        state.handle(Key::Backspace, &words);
        state.handle(Key::Backspace, &words);
        state.handle(Key::Backspace, &words);

        assert_eq!(state.rows()[0], first_row);
        assert_eq!((state.current_row(), state.current_col()), (1, 0));
    }

    #[test]
    fn six_misses_lose_and_reveal_answer() {
        let words = dictionary();
        let mut state = game();

        for word in ["trace", "slate", "brine", "pious", "dumpy"] {
            guess(&mut state, word, &words);
            assert_eq!(state.status(), GameStatus::Active);
        }
        let t = guess(&mut state, "adieu", &words);

        assert!(t.is_game_over());
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.current_row(), MAX_ATTEMPTS - 1);
        let message = state.message().unwrap();
        assert!(message.text.contains(state.answer().text()));
        assert_eq!(state.revealed_answer(), Some(state.answer()));
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let words = dictionary();
        let mut state = game();
        for word in ["trace", "slate", "brine", "pious", "dumpy"] {
            guess(&mut state, word, &words);
        }
        guess(&mut state, "crane", &words);
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.message().unwrap().text, "Phew");
    }

    #[test]
    fn terminal_state_ignores_all_keys() {
        let words = dictionary();
        let mut state = game();
        guess(&mut state, "crane", &words);
        let frozen = state.clone();

        for key in [Key::Letter('A'), Key::Backspace, Key::Enter] {
            assert_eq!(state.handle(key, &words), Transition::Ignored);
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn answer_hidden_while_active() {
        let mut state = game();
        assert_eq!(state.revealed_answer(), None);
        state.set_developer_mode(true);
        assert_eq!(state.revealed_answer().map(Word::text), Some("CRANE"));
    }

    #[test]
    fn invariants_catch_scored_row_after_cursor() {
        let mut state = game();
        state.rows[3].evaluations = [Absent; 5];
        assert!(state.check_invariants().is_err());
    }

    #[test]
    fn invariants_catch_gap_in_cursor_row() {
        let mut state = game();
        state.rows[0].letters[1] = Some('R');
        state.current_col = 2;
        assert!(state.check_invariants().is_err());
    }
}
