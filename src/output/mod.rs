//! Terminal output formatting
//!
//! Colored tiles, box-drawn board and keyboard, and the game's messages.

pub mod display;
pub mod formatters;

pub use display::{
    error_message, guess_prompt, how_to_play, loss_message, render_screen, scored_guess,
    win_message,
};
pub use formatters::terminal_width;
