//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, RemainingAlphabet};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// Color one guessed letter by its feedback
#[must_use]
pub fn colorize_letter(letter: char, feedback: LetterFeedback) -> ColoredString {
    let text = letter.to_string();
    match feedback {
        LetterFeedback::Correct => text.green().bold(),
        LetterFeedback::Present => text.yellow().bold(),
        LetterFeedback::Absent => text.bright_black(),
    }
}

/// Format an attempt as spaced, colored letters followed by emoji squares
#[must_use]
pub fn format_attempt(attempt: &Attempt) -> String {
    let letters: Vec<String> = attempt
        .guess
        .text()
        .chars()
        .zip(attempt.feedback.as_slice())
        .map(|(letter, &feedback)| colorize_letter(letter, feedback).to_string())
        .collect();

    format!("{}   {}", letters.join(" "), attempt.feedback.to_emoji())
}

/// Format the remaining alphabet as a single line
#[must_use]
pub fn format_alphabet(remaining: &RemainingAlphabet) -> String {
    if remaining.is_empty() {
        return "(none)".to_string();
    }
    remaining.to_string()
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)] // Bar widths are tiny
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value as f64 / max as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
