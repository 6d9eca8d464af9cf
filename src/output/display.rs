//! Text screens for the line-based game
//!
//! Everything here builds strings from a `GameSession`; the caller decides
//! where to write them.

use super::formatters::{center, heavy_grid, paint};
use crate::core::{FeedbackRow, LetterStatus, WORD_LEN, Word};
use crate::game::{GameSession, KEYBOARD_ROWS, KeyboardState};
use colored::Colorize;

/// Game title shown above the board
pub const TITLE: &str = "WORDLE";

/// Instructions shown once at the start of a game
#[must_use]
pub fn how_to_play(max_attempts: u8) -> String {
    let tile = |letter: &str, status| paint(letter, Some(status));
    let key = |letter: &str| letter.white().bold().to_string();

    let mut text = format!(
        "Get {max_attempts} chances to guess a {WORD_LEN}-letter word.\n\
         How To Play\n\
         Guess the Wordle in {max_attempts} tries.\n\
         Each guess must be a valid {WORD_LEN}-letter word.\n\
         The color of the tiles will change to show how close your guess was to the word.\n\
         Examples\n"
    );
    text.push_str(&format!("{}EARY\n", tile("W", LetterStatus::Correct)));
    text.push_str(&format!("{} is in the word and in the correct spot.\n", key("W")));
    text.push_str(&format!("P{}LLS\n", tile("I", LetterStatus::Present)));
    text.push_str(&format!("{} is in the word but in the wrong spot.\n", key("I")));
    text.push_str(&format!("VAG{}E\n", tile("U", LetterStatus::Absent)));
    text.push_str(&format!("{} is not in the word in any spot.\n", key("U")));
    text
}

fn board_cells(guess: &Word, feedback: &FeedbackRow) -> Vec<String> {
    (0..WORD_LEN)
        .map(|i| paint(&guess.char_at(i).to_string(), Some(feedback.get(i))))
        .collect()
}

/// The guess board: one row per attempt, filled rows colored by feedback
#[must_use]
pub fn board_lines(session: &GameSession) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = session
        .history()
        .iter()
        .map(|record| board_cells(&record.guess, &record.feedback))
        .collect();

    // A win leaves unspent rows; keep the board its full height either way
    let total = usize::from(session.max_attempts()).max(rows.len());
    rows.resize(total, vec![String::new(); WORD_LEN]);

    heavy_grid(&rows)
}

/// The keyboard, one grid per layout row, keys colored by aggregate status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .flat_map(|keys| {
            let cells: Vec<String> = keyboard
                .row(keys)
                .into_iter()
                .map(|(key, status)| paint(&key.to_string(), status))
                .collect();
            heavy_grid(&[cells])
        })
        .collect()
}

/// Title, board and keyboard, centered for a terminal `width` columns wide
#[must_use]
pub fn render_screen(session: &GameSession, width: usize) -> String {
    let mut screen = String::from("\n\n\n");
    screen.push_str(&center(&TITLE.white().bold().to_string(), width));
    screen.push('\n');

    for line in board_lines(session) {
        screen.push_str(&center(&line, width));
        screen.push('\n');
    }

    screen.push_str("\n\n\n");

    for line in keyboard_lines(session.keyboard()) {
        screen.push_str(&center(&line, width));
        screen.push('\n');
    }

    screen
}

/// Prompt for the next guess
#[must_use]
pub fn guess_prompt(session: &GameSession) -> String {
    format!(
        "Guess the {WORD_LEN}-letter word. You have {} attempts left: ",
        session.attempts_remaining()
    )
}

/// Message for a won game
#[must_use]
pub fn win_message(points: u8) -> String {
    format!("Congratulations! You guessed the wordle correctly. You got {points} points.")
        .as_str()
        .green()
        .bold()
        .to_string()
}

/// Message for a lost game, revealing the secret
#[must_use]
pub fn loss_message(secret: &Word) -> String {
    let secret = secret.to_string();
    let reveal = secret.as_str().white().bold();
    format!("Sorry, you lost. You've run out of chances. The wordle was {reveal}.")
        .as_str()
        .red()
        .bold()
        .to_string()
}

/// Error line for a rejected guess
#[must_use]
pub fn error_message(message: &str) -> String {
    message.red().bold().to_string()
}

/// One scored guess: colored letters followed by emoji squares
#[must_use]
pub fn scored_guess(guess: &Word, feedback: &FeedbackRow) -> String {
    format!("{} {}", board_cells(guess, feedback).concat(), feedback.to_emoji())
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes as strip_ansi;

    fn session(secret: &str) -> GameSession {
        GameSession::new(Word::new(secret).unwrap())
    }

    #[test]
    fn how_to_play_mentions_attempts_and_examples() {
        let binding = how_to_play(6);
        let text = strip_ansi(&binding);
        assert!(text.starts_with("Get 6 chances to guess a 5-letter word."));
        assert!(text.contains("WEARY"));
        assert!(text.contains("PILLS"));
        assert!(text.contains("VAGUE"));
    }

    #[test]
    fn empty_board_has_one_row_per_attempt() {
        let lines = board_lines(&session("about"));
        // top rule + 6 rows + 5 separators + bottom rule
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "┃   ┃   ┃   ┃   ┃   ┃");
    }

    #[test]
    fn board_shows_guesses_in_order() {
        let mut game = session("about");
        game.submit_guess("alert").unwrap();
        game.submit_guess("argue").unwrap();

        let lines: Vec<String> = board_lines(&game)
            .iter()
            .map(|l| strip_ansi(l).into_owned())
            .collect();
        assert_eq!(lines[1], "┃ A ┃ L ┃ E ┃ R ┃ T ┃");
        assert_eq!(lines[3], "┃ A ┃ R ┃ G ┃ U ┃ E ┃");
        assert_eq!(lines[5], "┃   ┃   ┃   ┃   ┃   ┃");
    }

    #[test]
    fn colored_board_lines_share_width() {
        colored::control::set_override(true);
        let mut game = session("about");
        game.submit_guess("alert").unwrap();

        let widths: Vec<usize> = board_lines(&game)
            .iter()
            .map(|l| console::measure_text_width(l))
            .collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
        assert_eq!(widths[0], 21);
    }

    #[test]
    fn board_keeps_height_after_win() {
        let mut game = session("about");
        game.submit_guess("about").unwrap();
        assert_eq!(board_lines(&game).len(), 13);
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = keyboard_lines(&KeyboardState::new());
        assert_eq!(lines.len(), 9);
        assert_eq!(
            strip_ansi(&lines[1]),
            "┃ Q ┃ W ┃ E ┃ R ┃ T ┃ Y ┃ U ┃ I ┃ O ┃ P ┃"
        );
        assert_eq!(strip_ansi(&lines[7]), "┃ Z ┃ X ┃ C ┃ V ┃ B ┃ N ┃ M ┃");
    }

    #[test]
    fn screen_contains_title_board_and_keyboard() {
        let mut game = session("about");
        game.submit_guess("alert").unwrap();

        let binding = render_screen(&game, 80);
        let screen = strip_ansi(&binding);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("┃ A ┃ L ┃ E ┃ R ┃ T ┃"));
        assert!(screen.contains("┃ Z ┃ X ┃ C ┃ V ┃ B ┃ N ┃ M ┃"));
    }

    #[test]
    fn prompt_counts_attempts() {
        let mut game = session("about");
        assert_eq!(
            guess_prompt(&game),
            "Guess the 5-letter word. You have 6 attempts left: "
        );
        game.submit_guess("alert").unwrap();
        assert!(guess_prompt(&game).contains("You have 5 attempts left"));
    }

    #[test]
    fn end_messages() {
        assert_eq!(
            strip_ansi(&win_message(4)),
            "Congratulations! You guessed the wordle correctly. You got 4 points."
        );
        assert_eq!(
            strip_ansi(&loss_message(&Word::new("about").unwrap())),
            "Sorry, you lost. You've run out of chances. The wordle was ABOUT."
        );
    }

    #[test]
    fn scored_guess_shows_letters_and_squares() {
        let secret = Word::new("about").unwrap();
        let guess = Word::new("alert").unwrap();
        let row = crate::core::compute_feedback(&secret, &guess);
        assert_eq!(strip_ansi(&scored_guess(&guess, &row)), "ALERT 🟩⬜⬜⬜🟩");
    }
}
