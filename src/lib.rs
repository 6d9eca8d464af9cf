//! Terminal Wordle
//!
//! Guess a secret five-letter word in six tries, with per-letter feedback that
//! handles duplicate letters the way the real game does.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterStatus, Word, compute_feedback};
//! use wordle_game::game::{GameSession, Outcome};
//!
//! // Score a single guess
//! let secret = Word::new("about").unwrap();
//! let guess = Word::new("alert").unwrap();
//! let row = compute_feedback(&secret, &guess);
//! assert_eq!(row.get(0), LetterStatus::Correct);
//!
//! // Or play a whole game
//! let mut game = GameSession::new(secret);
//! game.submit_guess("alert").unwrap();
//! game.submit_guess("about").unwrap();
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
