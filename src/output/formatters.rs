//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackSymbol, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Colour one uppercase letter according to its feedback symbol
#[must_use]
pub fn colored_letter(letter: u8, symbol: FeedbackSymbol) -> ColoredString {
    let text = char::from(letter.to_ascii_uppercase()).to_string();
    match symbol {
        FeedbackSymbol::Match => text.green().bold(),
        FeedbackSymbol::Present => text.yellow().bold(),
        FeedbackSymbol::Absent => text.bright_black().bold(),
    }
}

/// Render a guess with each letter coloured by its feedback
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    (0..WORD_LENGTH)
        .map(|i| colored_letter(word.char_at(i), feedback.at(i)).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_absent() {
        let feedback = Feedback::parse("-----").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_all_match() {
        assert_eq!(feedback_to_emoji(&Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        colored::control::set_override(false);
        let word = Word::new("trace").unwrap();
        let feedback = Feedback::parse("-GGYG").unwrap();
        assert_eq!(colored_guess(&word, &feedback), "TRACE");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
