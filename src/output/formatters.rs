//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use colored::Colorize;
use comfy_table::Table;

/// Width assumed when the terminal size cannot be queried
pub const FALLBACK_WIDTH: usize = 80;

/// Heavy box-drawing charset, in comfy-table component order
const HEAVY_GRID: &str = "┃┃━━┣━╋┫┃━╋┣┫┳┻┏┓┗┛";

/// Current terminal width in columns
#[must_use]
pub fn terminal_width() -> usize {
    crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(cols, _)| usize::from(cols))
}

/// Color text by feedback status: green, yellow, red, or plain when unseen
#[must_use]
pub fn paint(text: &str, status: Option<LetterStatus>) -> String {
    match status {
        Some(LetterStatus::Correct) => text.green().bold().to_string(),
        Some(LetterStatus::Present) => text.yellow().bold().to_string(),
        Some(LetterStatus::Absent) => text.red().bold().to_string(),
        None => text.to_string(),
    }
}

/// Left-pad a line so it sits in the middle of `width` columns
#[must_use]
pub fn center(line: &str, width: usize) -> String {
    let padding = width.saturating_sub(console::measure_text_width(line)) / 2;
    format!("{}{line}", " ".repeat(padding))
}

/// Cells laid out as a table with heavy borders and a rule between rows
///
/// Cells may carry ANSI colors. Empty cells are drawn one column wide.
#[must_use]
pub fn heavy_grid(rows: &[Vec<String>]) -> Vec<String> {
    let mut table = Table::new();
    table.load_preset(HEAVY_GRID);

    for row in rows {
        table.add_row(row.iter().map(|cell| if cell.is_empty() { " " } else { cell.as_str() }));
    }

    table.lines().collect()
}
