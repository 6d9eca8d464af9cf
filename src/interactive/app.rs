//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{GameSession, MAX_ATTEMPTS_LIMIT, Outcome};
use crate::wordlists::SecretSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    pub source: SecretSource,
    pub max_attempts: u8,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games played in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: [usize; MAX_ATTEMPTS_LIMIT as usize + 1],
}

impl Statistics {
    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        self.guess_distribution.get(guesses).copied().unwrap_or(0)
    }
}

impl App {
    #[must_use]
    pub fn new(mut source: SecretSource, max_attempts: u8) -> Self {
        let session = GameSession::with_max_attempts(source.next_secret(), max_attempts);

        Self {
            session,
            source,
            max_attempts,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Guess the {WORD_LEN}-letter word in {max_attempts} tries."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Green: right spot. Yellow: wrong spot. Red: not in the word."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.is_terminal() => self.handle_game_over_key(key.code),
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q' | 'Q') => self.should_quit = true,
            KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
            _ => {}
        }
    }

    /// Append a character to the pending guess (capped at word length)
    pub fn push_char(&mut self, c: char) {
        if c.is_control() || self.input_buffer.chars().count() >= WORD_LEN {
            return;
        }
        self.input_buffer.push(c.to_ascii_uppercase());
    }

    /// Submit the pending guess to the session
    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&guess) {
            Ok(feedback) => {
                debug!("submitted {guess} -> {feedback}");
                self.after_guess();
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                // Keep what was typed so it can be corrected
                self.input_buffer = guess;
            }
        }
    }

    fn after_guess(&mut self) {
        match self.session.outcome() {
            Outcome::Won => {
                let used = self.session.attempts_used();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(used) {
                    *slot += 1;
                }
                info!("game won in {used} guesses");

                let points = self.session.score().unwrap_or_default();
                self.add_message(
                    &format!("Congratulations! You guessed the wordle. You got {points} points."),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Lost => {
                self.stats.total_games += 1;
                info!("game lost");

                let secret = *self.session.secret();
                self.add_message(
                    &format!("Out of chances. The wordle was {secret}."),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            Outcome::Pending => {
                let left = self.session.attempts_remaining();
                self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
            }
        }
    }

    /// Start a fresh game with the next secret
    pub fn new_game(&mut self) {
        self.session = GameSession::with_max_attempts(self.source.next_secret(), self.max_attempts);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
