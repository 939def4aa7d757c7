//! Game state machine and the controller that owns it

mod controller;
mod event;
mod state;
mod stats;
mod transition;

pub use controller::GameController;
pub use event::{GameEvent, Key, NewGameChoice};
pub use state::{GameState, GameStatus, GuessRow, Message, MessageStyle, Tile};
pub use stats::Statistics;
pub use transition::{SubmitError, Transition};
