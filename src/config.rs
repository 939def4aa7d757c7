//! Runtime configuration
//!
//! Resolved from command-line flags and environment variables by `main`.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory
pub const APP_DIR_NAME: &str = "wordle_daily";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where saved games and statistics live
    pub data_dir: PathBuf,
    /// Custom answer list; the embedded lists are used when `None`
    pub wordlist: Option<PathBuf>,
    /// Allow the developer-mode toggle that reveals the answer
    pub developer: bool,
    /// Write log output to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            wordlist: None,
            developer: false,
            log_file: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

/// `$XDG_DATA_HOME/wordle_daily`, else `$HOME/.local/share/wordle_daily`,
/// else `./.wordle_daily`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    data_dir_from(
        env::var_os("XDG_DATA_HOME").map(PathBuf::from).as_deref(),
        env::var_os("HOME").map(PathBuf::from).as_deref(),
    )
}

fn data_dir_from(xdg_data_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    match (xdg_data_home, home) {
        (Some(xdg), _) if xdg.is_absolute() => xdg.join(APP_DIR_NAME),
        (_, Some(home)) if !home.as_os_str().is_empty() => {
            home.join(".local").join("share").join(APP_DIR_NAME)
        }
        _ => PathBuf::from(format!(".{APP_DIR_NAME}")),
    }
}
