//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use colored::{ColoredString, Colorize};

/// Format feedback as key pegs: `●` exact, `○` color, `·` for the rest
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, length: usize) -> String {
    let exact = usize::from(feedback.exact());
    let color = usize::from(feedback.color());
    let empty = length.saturating_sub(exact + color);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(color), "·".repeat(empty))
}

/// Color one palette letter the way the classic pegs look
fn color_letter(letter: char) -> ColoredString {
    let text = letter.to_string();
    match letter {
        'R' => text.red(),
        'G' => text.green(),
        'B' => text.blue(),
        'Y' => text.yellow(),
        'O' => text.truecolor(255, 165, 0),
        'P' => text.magenta(),
        'W' => text.white(),
        'K' => text.bright_black(),
        'C' => text.cyan(),
        'M' => text.bright_magenta(),
        _ => text.normal(),
    }
    .bold()
}

/// Format a code with each letter in its peg color
#[must_use]
pub fn colored_code(code: &Code) -> String {
    code.to_string().chars().map(|c| color_letter(c).to_string()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
