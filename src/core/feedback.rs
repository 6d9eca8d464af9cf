//! Per-letter feedback for a guess
//!
//! Scoring is two-pass so duplicate letters are credited correctly:
//! exact matches claim their letters first, then the remaining letters are
//! handed out as Present from left to right.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Classification of one guessed letter
///
/// Variants are ordered by priority, so `max` picks the most informative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter is not in the secret (or every copy is already accounted for)
    Absent,
    /// Letter is in the secret at another position
    Present,
    /// Letter is in the secret at this position
    Correct,
}

impl LetterStatus {
    /// Emoji square for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for one guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([LetterStatus; WORD_LEN]);

impl FeedbackRow {
    /// Wrap raw statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LEN]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LEN] {
        &self.0
    }

    /// Status at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Number of positions with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Render as emoji squares, e.g. "🟩⬜⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. Count the secret's letters
/// 2. First pass: mark exact matches Correct and consume their counts
/// 3. Second pass: for every other position, mark Present while the letter
///    still has a count left, otherwise Absent
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus::*, Word, compute_feedback};
///
/// let secret = Word::new("allow").unwrap();
/// let guess = Word::new("llama").unwrap();
/// let row = compute_feedback(&secret, &guess);
///
/// assert_eq!(row.statuses(), &[Present, Correct, Present, Absent, Absent]);
/// ```
#[must_use]
pub fn compute_feedback(secret: &Word, guess: &Word) -> FeedbackRow {
    let mut result = [LetterStatus::Absent; WORD_LEN];
    let mut remaining = secret.letter_counts();
    let guess_letters = guess.letters();
    let secret_letters = secret.letters();

    // First pass: exact matches
    for (i, (&g, &s)) in guess_letters.iter().zip(secret_letters).enumerate() {
        if g == s {
            result[i] = LetterStatus::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, leftmost first
    for (status, &letter) in result.iter_mut().zip(guess_letters) {
        if *status == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&letter)
            && *count > 0
        {
            *status = LetterStatus::Present;
            *count -= 1;
        }
    }

    FeedbackRow(result)
}
