//! Best-known status of each letter across a session
//!
//! Renderers use this to color an on-screen keyboard. Lookups are keyed by
//! letter, so the layout below is only a presentation concern.

use crate::core::{FeedbackRow, LetterStatus, Word};
use rustc_hash::FxHashMap;

/// QWERTY rows for keyboard-style displays
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Aggregate letter statuses
///
/// A letter with no entry has not been guessed yet. Entries only ever move up
/// in priority: Absent, then Present, then Correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the aggregate
    pub fn record(&mut self, guess: &Word, row: &FeedbackRow) {
        for (&letter, &status) in guess.letters().iter().zip(row.statuses()) {
            self.upgrade(letter, status);
        }
    }

    fn upgrade(&mut self, letter: u8, status: LetterStatus) {
        self.letters
            .entry(letter)
            .and_modify(|best| *best = (*best).max(status))
            .or_insert(status);
    }

    /// Best status seen for a letter, or `None` if it was never guessed
    ///
    /// Case-insensitive.
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        u8::try_from(letter.to_ascii_uppercase())
            .ok()
            .and_then(|byte| self.letters.get(&byte).copied())
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.letters.len()
    }

    /// Statuses for one layout row, in key order
    #[must_use]
    pub fn row(&self, keys: &str) -> Vec<(char, Option<LetterStatus>)> {
        keys.chars().map(|key| (key, self.status(key))).collect()
    }
}
