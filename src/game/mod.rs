//! Game state
//!
//! A `GameSession` owns the secret, the attempt counter, the board history and
//! the keyboard aggregate. It depends only on `core`.

mod keyboard;
mod session;

pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameConfig, GameSession, GuessRecord, MAX_ATTEMPTS_LIMIT, Outcome,
};
