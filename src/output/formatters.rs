//! Formatting utilities for terminal output

use crate::core::{Feedback, KEYBOARD_ROWS, KeyStatusMap, LetterStatus};
use colored::{ColoredString, Colorize};

/// Letter tile coloured by its status
#[must_use]
pub fn status_tile(letter: char, status: Option<LetterStatus>) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Some(LetterStatus::Correct) => tile.black().on_green().bold(),
        Some(LetterStatus::Present) => tile.black().on_yellow().bold(),
        Some(LetterStatus::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// Guess letters as coloured tiles
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.statuses())
        .map(|(letter, &status)| status_tile(letter, Some(status)).to_string())
        .collect()
}

/// Keyboard rows with each key coloured by its merged status
#[must_use]
pub fn keyboard_lines(keyboard: &KeyStatusMap) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| status_tile(key, keyboard.get(key)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
