//! TUI rendering with ratatui
//!
//! Board and keyboard are drawn as bordered 5x3 tiles colored by feedback.

use super::app::{App, MessageStyle};
use crate::core::{LetterStatus, WORD_LEN};
use crate::game::{KEYBOARD_ROWS, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const WIDEST_KEY_ROW: u16 = 10;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and keyboard
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let board_width = WORD_LEN as u16 * (TILE_WIDTH + TILE_GAP) + TILE_GAP + 2;
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(20)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(KEYBOARD_ROWS.len() as u16 * TILE_HEIGHT + 2), // Keyboard
            Constraint::Length(u16::from(app.session.max_attempts()) + 2),    // Guesses
            Constraint::Min(3),                                                // Messages
        ])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_distribution(f, app, side_chunks[1]);
    render_messages(f, app, side_chunks[2]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: Option<LetterStatus>) -> Style {
    match status {
        Some(LetterStatus::Correct) => Style::default()
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Present) => Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        Some(LetterStatus::Absent) => Style::default().bg(Color::Red).fg(Color::White),
        None => Style::default(),
    }
}

/// One letter tile, clipped to `bounds`
fn render_tile(
    f: &mut Frame,
    bounds: Rect,
    tile: Rect,
    letter: Option<char>,
    status: Option<LetterStatus>,
    active: bool,
) {
    let area = tile.intersection(bounds);
    if area.is_empty() {
        return;
    }

    let border_type = if active {
        BorderType::Double
    } else {
        BorderType::Plain
    };
    let text = letter.map(String::from).unwrap_or_default();
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(tile_style(status))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type),
        );
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let session = &app.session;
    let history = session.history();
    let typed: Vec<char> = app.input_buffer.chars().collect();
    let active_row = (session.outcome() == Outcome::Pending).then_some(history.len());

    for row in 0..usize::from(session.max_attempts()) {
        let y = inner.y + row as u16 * TILE_HEIGHT;
        for col in 0..WORD_LEN {
            let x = inner.x + TILE_GAP + col as u16 * (TILE_WIDTH + TILE_GAP);
            let tile = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);

            let (letter, status) = match history.get(row) {
                Some(record) => (
                    Some(record.guess.char_at(col)),
                    Some(record.feedback.get(col)),
                ),
                None if active_row == Some(row) => (typed.get(col).copied(), None),
                None => (None, None),
            };
            render_tile(f, inner, tile, letter, status, active_row == Some(row));
        }
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Keyboard ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let keyboard = app.session.keyboard();
    for (row, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let y = inner.y + row as u16 * TILE_HEIGHT;
        // Shorter rows are indented to sit under the middle of the top row
        let indent = (WIDEST_KEY_ROW - keys.len() as u16) * TILE_WIDTH / 2;

        for (col, (key, status)) in keyboard.row(keys).into_iter().enumerate() {
            let x = inner.x + indent + col as u16 * TILE_WIDTH;
            let tile = Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT);
            render_tile(f, inner, tile, Some(key), status, false);
        }
    }
}

/// Wins per guess count as horizontal bars scaled to the panel width
fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Guesses ").borders(Borders::ALL);
    // Room left after the row label and the count
    let bar_room = usize::from(block.inner(area).width).saturating_sub(8);

    let rows = 1..=usize::from(app.session.max_attempts());
    let most = rows
        .clone()
        .map(|n| app.stats.wins_in(n))
        .max()
        .unwrap_or(0)
        .max(1);

    let items: Vec<ListItem> = rows
        .map(|n| {
            let wins = app.stats.wins_in(n);
            let bar = if wins == 0 {
                0
            } else {
                (wins * bar_room / most).max(1)
            };
            let style = if wins == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(format!("{n:>2} {} {wins}", "█".repeat(bar))).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.session.outcome() {
        Outcome::Won => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        Outcome::Lost => (
            " Out of chances | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        Outcome::Pending => (
            " Type your guess | Enter: submit | Backspace: delete ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts left: {}/{}",
        app.session.attempts_remaining(),
        app.session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let letters_text = format!("Letters tried: {}", app.session.keyboard().guessed_count());
    let letters = Paragraph::new(letters_text).alignment(Alignment::Center);
    f.render_widget(letters, chunks[2]);

    let help_text = if app.session.is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
