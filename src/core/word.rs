//! Validated five-letter words
//!
//! Every secret and every accepted guess is a `Word`. Validation happens once,
//! here, so the feedback engine can assume well-formed input.

use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter word, stored as uppercase ASCII bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Reasons a guess is rejected
///
/// All variants are recoverable: the caller re-prompts and no attempt is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input did not have exactly five characters (carries the actual count)
    WrongLength(usize),
    /// Input contained something other than A-Z / a-z
    NonAlphabetic,
    /// The session already ended in a win or a loss
    GameOver,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(_) => write!(f, "Only {WORD_LEN}-letter words are allowed"),
            Self::NonAlphabetic => write!(
                f,
                "Your guess must contain only letters of the English alphabet"
            ),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Word {
    /// Validate and normalize a word
    ///
    /// Length is counted in characters, so multi-byte input is reported as
    /// `WrongLength` or `NonAlphabetic` rather than being split mid-character.
    ///
    /// # Errors
    /// - `WrongLength` if the input is not exactly 5 characters
    /// - `NonAlphabetic` if any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{ValidationError, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert_eq!(Word::new("cranes"), Err(ValidationError::WrongLength(6)));
    /// assert_eq!(Word::new("cr4ne"), Err(ValidationError::NonAlphabetic));
    /// ```
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(ValidationError::WrongLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::NonAlphabetic);
        }

        // All ASCII from here on, so bytes and chars line up
        let mut letters = [0u8; WORD_LEN];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// The word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// The letter at a position (0-4) as a `char`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.letters[position] as char
    }

    /// Count occurrences of each letter
    ///
    /// This is the multiset the feedback engine draws Present marks from.
    #[must_use]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
