//! Formatting utilities for terminal output

use crate::core::{Feedback, Symbol, Word};
use colored::{ColoredString, Colorize};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width] below
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for an expected-elimination score out of `remaining` candidates
#[must_use]
pub fn score_bar(score: f64, remaining: usize, width: usize) -> String {
    create_progress_bar(score, remaining as f64, width)
}

/// Uppercase letter on a tile colored like its feedback
#[must_use]
pub fn tile(letter: char, symbol: Symbol) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase()).black().bold();
    match symbol {
        Symbol::Correct => text.on_green(),
        Symbol::Present => text.on_yellow(),
        Symbol::Absent => text.on_bright_black(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn tile_row(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.symbols())
        .map(|(letter, &symbol)| tile(letter, symbol).to_string())
        .collect()
}
