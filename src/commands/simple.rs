//! Simple line-based game
//!
//! Prints the board and keyboard after every guess, like a classic terminal
//! script. Input and output are injected so the loop can be driven from tests.

use crate::game::{GameSession, Outcome};
use crate::output::{
    error_message, guess_prompt, how_to_play, loss_message, render_screen, win_message,
};
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

/// Play one game to completion
///
/// Returns the final outcome. If the input ends before the game does, the
/// session is left `Pending` and that is returned.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    reader: &mut R,
    out: &mut W,
    width: usize,
) -> Result<Outcome> {
    writeln!(out, "{}", how_to_play(session.max_attempts()))?;
    write!(out, "{}", render_screen(session, width))?;

    while !session.is_terminal() {
        write!(out, "{}", guess_prompt(session))?;
        out.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            debug!("input closed before the game finished");
            writeln!(out)?;
            return Ok(session.outcome());
        }

        match session.submit_guess(input.trim()) {
            Ok(_) => write!(out, "{}", render_screen(session, width))?,
            Err(e) => writeln!(out, "{}", error_message(&e.to_string()))?,
        }
    }

    match session.outcome() {
        Outcome::Won => writeln!(out, "{}", win_message(session.score().unwrap_or_default()))?,
        Outcome::Lost => writeln!(out, "{}", loss_message(session.secret()))?,
        Outcome::Pending => {}
    }

    Ok(session.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use console::strip_ansi_codes;
    use std::io::Cursor;

    fn play(secret: &str, input: &str) -> (GameSession, Outcome, String) {
        let mut session = GameSession::new(Word::new(secret).unwrap());
        let mut reader = Cursor::new(input.to_string());
        let mut out = Vec::new();

        let outcome = run_simple(&mut session, &mut reader, &mut out, 80).unwrap();
        let text = strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned();
        (session, outcome, text)
    }

    #[test]
    fn immediate_win() {
        let (session, outcome, text) = play("about", "about\n");

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(session.attempts_used(), 1);
        assert!(text.contains("You got 6 points."));
    }

    #[test]
    fn win_after_misses() {
        let (session, outcome, text) = play("about", "alert\nargue\nabout\n");

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(session.attempts_remaining(), 4);
        assert!(text.contains("You have 5 attempts left"));
        assert!(text.contains("You got 4 points."));
    }

    #[test]
    fn invalid_guesses_reprompt_without_cost() {
        let (session, outcome, text) = play("about", "abc\nab0ut\nabouts\nabout\n");

        assert_eq!(outcome, Outcome::Won);
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(text.matches("Only 5-letter words are allowed").count(), 2);
        assert!(text.contains("Your guess must contain only letters of the English alphabet"));
        assert_eq!(text.matches("You have 6 attempts left").count(), 4);
    }

    #[test]
    fn six_misses_reveal_secret() {
        let input = "alert\nargue\nbeach\nabove\nalike\narise\n";
        let (session, outcome, text) = play("about", input);

        assert_eq!(outcome, Outcome::Lost);
        assert_eq!(session.attempts_remaining(), 0);
        assert!(text.contains("The wordle was ABOUT."));
    }

    #[test]
    fn input_after_game_end_is_ignored() {
        let (session, outcome, _) = play("about", "about\nalert\n");
        assert_eq!(outcome, Outcome::Won);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn closed_input_leaves_game_pending() {
        let (session, outcome, text) = play("about", "alert\n");

        assert_eq!(outcome, Outcome::Pending);
        assert_eq!(session.attempts_remaining(), 5);
        assert!(!text.contains("The wordle was"));
    }

    #[test]
    fn whitespace_around_guess_is_ignored() {
        let (_, outcome, _) = play("about", "  About \r\n");
        assert_eq!(outcome, Outcome::Won);
    }

    #[test]
    fn output_starts_with_instructions() {
        let (_, _, text) = play("about", "about\n");
        assert!(text.starts_with("Get 6 chances to guess a 5-letter word."));
        assert!(text.contains("WORDLE"));
    }
}
