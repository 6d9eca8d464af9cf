//! Core domain types for Wordle
//!
//! Words, validation errors and the feedback engine. Nothing in here knows
//! about terminals, word lists or game state.

mod feedback;
mod word;

pub use feedback::{FeedbackRow, LetterStatus, compute_feedback};
pub use word::{ValidationError, WORD_LEN, Word};
