//! Terminal output formatting
//!
//! Display utilities for line mode and text shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_feedback, print_keyboard, print_statistics};
pub use formatters::share_text;
