//! Saving and restoring games
//!
//! State is stored as JSON strings under fixed keys. `FileStorage` keeps one
//! file per key in the data directory; `MemoryStorage` keeps nothing on disk.

mod saved;
mod storage;

pub use saved::{
    GAME_KEY, STATISTICS_KEY, SavedGame, load_game, load_statistics, save_game, save_statistics,
};
pub use storage::{FileStorage, MemoryStorage, PersistenceError, Storage};
