//! Formatting helpers for terminal output

use colored::Colorize;

use crate::core::{Feedback, Pattern};

/// Render a guess with each letter colored by its feedback symbol
///
/// Hits are green, Presents yellow, Misses dimmed.
#[must_use]
pub fn colorize_guess(word: &str, pattern: Pattern) -> String {
    let symbols = pattern.symbols();
    word.to_uppercase()
        .chars()
        .zip(symbols)
        .map(|(ch, symbol)| {
            let s = ch.to_string();
            match symbol {
                Feedback::Hit => s.green().bold().to_string(),
                Feedback::Present => s.yellow().bold().to_string(),
                Feedback::Miss => s.bright_black().to_string(),
            }
        })
        .collect()
}

/// Render a proportional horizontal bar for a distribution row
#[must_use]
pub fn distribution_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_guess_covers_all_letters() {
        // Strip ANSI noise by checking the letters survive in order
        let pattern = Pattern::from_str("--+-!").unwrap();
        let rendered = colorize_guess("crane", pattern);
        let letters: String = rendered.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "CRANE");
    }

    #[test]
    fn distribution_bar_full_and_empty() {
        let full = distribution_bar(1.0, 10);
        assert_eq!(full.chars().filter(|&c| c == '█').count(), 10);

        let empty = distribution_bar(0.0, 10);
        assert_eq!(empty.chars().filter(|&c| c == '░').count(), 10);
    }

    #[test]
    fn distribution_bar_clamps_overflow() {
        let over = distribution_bar(1.5, 10);
        assert_eq!(over.chars().filter(|&c| c == '█').count(), 10);
    }
}
