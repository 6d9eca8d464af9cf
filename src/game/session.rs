//! One game from secret selection to win or loss

use super::keyboard::KeyboardState;
use crate::core::{FeedbackRow, ValidationError, Word, compute_feedback};
use log::{debug, info};

/// Attempts per game unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: u8 = 6;

/// Largest attempt budget a session accepts
pub const MAX_ATTEMPTS_LIMIT: u8 = 10;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Won,
    Lost,
}

/// Settings for starting games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u8,
    /// Fixed secret; a random word is drawn when `None`
    pub secret: Option<String>,
    /// Seed for the random secret choice
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            secret: None,
            seed: None,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A single accepted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: FeedbackRow,
}

/// State of one game
///
/// Owned by whichever loop drives the game. Renderers read it through the
/// accessors; only `submit_guess` mutates it.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    max_attempts: u8,
    attempts_remaining: u8,
    history: Vec<GuessRecord>,
    keyboard: KeyboardState,
    outcome: Outcome,
}

impl GameSession {
    /// Start a game with the default six attempts
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_attempts(secret, DEFAULT_MAX_ATTEMPTS)
    }

    /// Start a game with a custom attempt budget, clamped to
    /// `1..=MAX_ATTEMPTS_LIMIT`
    #[must_use]
    pub fn with_max_attempts(secret: Word, max_attempts: u8) -> Self {
        let max_attempts = max_attempts.clamp(1, MAX_ATTEMPTS_LIMIT);
        debug!("new session with {max_attempts} attempts");

        Self {
            secret,
            max_attempts,
            attempts_remaining: max_attempts,
            history: Vec::with_capacity(usize::from(max_attempts)),
            keyboard: KeyboardState::new(),
            outcome: Outcome::Pending,
        }
    }

    /// Validate, score and record a guess
    ///
    /// A correct guess wins without spending an attempt; any other accepted
    /// guess spends one, and the game is lost when none remain.
    ///
    /// # Errors
    /// - `GameOver` once the session is won or lost
    /// - `WrongLength` / `NonAlphabetic` for malformed input
    ///
    /// Rejected guesses leave the session untouched.
    pub fn submit_guess(&mut self, raw: &str) -> Result<FeedbackRow, ValidationError> {
        if self.is_terminal() {
            return Err(ValidationError::GameOver);
        }

        let guess = Word::new(raw).inspect_err(|e| debug!("rejected guess {raw:?}: {e}"))?;
        let feedback = compute_feedback(&self.secret, &guess);

        self.history.push(GuessRecord { guess, feedback });
        self.keyboard.record(&guess, &feedback);

        if guess == self.secret {
            self.outcome = Outcome::Won;
            info!(
                "won after {} guesses with {} attempts left",
                self.history.len(),
                self.attempts_remaining
            );
        } else {
            self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
            if self.attempts_remaining == 0 {
                self.outcome = Outcome::Lost;
                info!("lost, secret was {}", self.secret);
            }
        }

        debug!(
            "guess {guess} -> {feedback}, {} attempts left",
            self.attempts_remaining
        );
        Ok(feedback)
    }

    /// True once the game is won or lost
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Number of accepted guesses, including a winning one
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Aggregate letter statuses for keyboard displays
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The secret word
    ///
    /// Displays should only reveal this once the session is terminal.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Points for a win: attempts still unspent when the secret was found
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        (self.outcome == Outcome::Won).then_some(self.attempts_remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{self, Absent, Correct};

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn new_session_is_pending_with_six_attempts() {
        let game = session("about");
        assert_eq!(game.outcome(), Outcome::Pending);
        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.max_attempts(), 6);
        assert!(!game.is_terminal());
        assert!(game.history().is_empty());
        assert_eq!(game.score(), None);
    }

    #[test]
    fn wrong_length_does_not_consume_attempt() {
        let mut game = session("about");

        assert_eq!(game.submit_guess("ABOU"), Err(ValidationError::WrongLength(4)));
        assert_eq!(
            game.submit_guess("ABOUTS"),
            Err(ValidationError::WrongLength(6))
        );

        assert_eq!(game.attempts_remaining(), 6);
        assert!(game.history().is_empty());
        assert_eq!(game.keyboard().guessed_count(), 0);
    }

    #[test]
    fn non_alphabetic_does_not_consume_attempt() {
        let mut game = session("about");

        assert_eq!(game.submit_guess("AB0UT"), Err(ValidationError::NonAlphabetic));
        assert_eq!(game.submit_guess("ab ut"), Err(ValidationError::NonAlphabetic));

        assert_eq!(game.attempts_remaining(), 6);
        assert_eq!(game.outcome(), Outcome::Pending);
    }

    #[test]
    fn lowercase_guess_is_normalized() {
        let mut game = session("about");
        let row = game.submit_guess("alert").unwrap();

        assert_eq!(row.statuses(), &[Correct, Absent, Absent, Absent, Correct]);
        assert_eq!(game.history()[0].guess.to_string(), "ALERT");
    }

    #[test]
    fn about_end_to_end_win() {
        let mut game = session("about");

        let first = game.submit_guess("ALERT").unwrap();
        assert_eq!(first.statuses(), &[Correct, Absent, Absent, Absent, Correct]);
        assert_eq!(game.attempts_remaining(), 5);
        assert_eq!(game.outcome(), Outcome::Pending);

        game.submit_guess("ARGUE").unwrap();
        assert_eq!(game.attempts_remaining(), 4);

        let last = game.submit_guess("ABOUT").unwrap();
        assert!(last.is_solved());
        assert_eq!(game.outcome(), Outcome::Won);
        assert!(game.is_terminal());
        assert_eq!(game.attempts_remaining(), 4);
        assert_eq!(game.attempts_used(), 3);
        assert_eq!(game.score(), Some(4));
    }

    #[test]
    fn first_guess_win_scores_full_budget() {
        let mut game = session("about");
        game.submit_guess("about").unwrap();
        assert_eq!(game.score(), Some(6));
    }

    #[test]
    fn six_misses_lose() {
        let mut game = session("about");
        let misses = ["ALERT", "ARGUE", "BEACH", "ABOVE", "ALIKE", "ARISE"];

        for (i, guess) in misses.iter().enumerate() {
            assert!(!game.is_terminal());
            game.submit_guess(guess).unwrap();
            assert_eq!(usize::from(game.attempts_remaining()), 5 - i);
        }

        assert_eq!(game.outcome(), Outcome::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.score(), None);
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut game = session("about");
        for guess in ["ALERT", "ARGUE", "BEACH", "ABOVE", "ALIKE"] {
            game.submit_guess(guess).unwrap();
        }
        assert_eq!(game.attempts_remaining(), 1);

        game.submit_guess("ABOUT").unwrap();
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.score(), Some(1));
    }

    #[test]
    fn no_transition_out_of_terminal_state() {
        let mut game = session("about");
        game.submit_guess("ABOUT").unwrap();

        assert_eq!(game.submit_guess("ALERT"), Err(ValidationError::GameOver));
        assert_eq!(game.outcome(), Outcome::Won);
        assert_eq!(game.history().len(), 1);

        let mut lost = GameSession::with_max_attempts(Word::new("about").unwrap(), 1);
        lost.submit_guess("ALERT").unwrap();
        assert_eq!(lost.outcome(), Outcome::Lost);
        assert_eq!(lost.submit_guess("ABOUT"), Err(ValidationError::GameOver));
        assert_eq!(lost.attempts_remaining(), 0);
    }

    #[test]
    fn game_over_is_reported_before_validation() {
        let mut game = session("about");
        game.submit_guess("ABOUT").unwrap();
        assert_eq!(game.submit_guess("x"), Err(ValidationError::GameOver));
    }

    #[test]
    fn custom_attempt_budget() {
        let game = GameSession::with_max_attempts(Word::new("about").unwrap(), 3);
        assert_eq!(game.attempts_remaining(), 3);

        let clamped = GameSession::with_max_attempts(Word::new("about").unwrap(), 0);
        assert_eq!(clamped.attempts_remaining(), 1);
    }

    #[test]
    fn attempt_budget_is_capped() {
        let game = GameSession::with_max_attempts(Word::new("about").unwrap(), 200);
        assert_eq!(game.max_attempts(), MAX_ATTEMPTS_LIMIT);
        assert_eq!(game.attempts_remaining(), MAX_ATTEMPTS_LIMIT);
    }

    #[test]
    fn same_guess_twice_keeps_aggregate() {
        let mut game = session("allow");
        game.submit_guess("LLAMA").unwrap();
        let before = game.keyboard().clone();

        game.submit_guess("LLAMA").unwrap();
        assert_eq!(game.keyboard(), &before);
        assert_eq!(game.keyboard().status('L'), Some(LetterStatus::Correct));
    }

    #[test]
    fn history_records_each_row() {
        let mut game = session("about");
        game.submit_guess("ALERT").unwrap();
        game.submit_guess("ARGUE").unwrap();

        let rows: Vec<String> = game.history().iter().map(|r| r.feedback.to_emoji()).collect();
        assert_eq!(rows, ["🟩⬜⬜⬜🟩", "🟩⬜⬜🟩⬜"]);
    }

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.secret.is_none());
        assert!(config.seed.is_none());
    }
}
