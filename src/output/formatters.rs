//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Word};
use crate::store::HistoryRecord;
use colored::{ColoredString, Colorize};

/// One letter as a colored tile
#[must_use]
pub fn letter_tile(letter: u8, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&c, &state)| letter_tile(c, Some(state)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One history record as a single line
#[must_use]
pub fn history_line(record: &HistoryRecord) -> String {
    let result = if record.win { "won " } else { "lost" };
    let kind = if record.daily { "daily" } else { "random" };
    format!(
        "{}  {result} in {}  +{:<3} {kind}",
        record.date.format("%Y-%m-%d"),
        record.attempts,
        record.score_earned
    )
}
