//! Score a single guess against a chosen secret

use crate::core::{FeedbackRow, ValidationError, Word, compute_feedback};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub feedback: FeedbackRow,
}

/// Validate both words and compute the feedback
///
/// # Errors
///
/// Returns a `ValidationError` if either word is not five ASCII letters.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, ValidationError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;

    let feedback = compute_feedback(&secret, &guess);
    Ok(ScoreResult { guess, feedback })
}
