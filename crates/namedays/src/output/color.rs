//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Names:    cyan
//!   - Days:     bold
//!   - Counts:   green
//!   - Women:    magenta gender tag
//!   - Men:      blue gender tag
//!   - Muted:    dimmed (field labels)

use colored::Colorize;
use nameday_format::{Gender, MonthDay};

use super::OutputConfig;

/// Colorize a name (cyan).
pub(crate) fn colorize_name(name: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return name.to_string();
    }
    name.cyan().to_string()
}

/// Colorize a day (bold), padded so names line up in listings.
pub(crate) fn colorize_day(day: MonthDay, config: &OutputConfig) -> String {
    let text = format!("{:<7}", day.to_string());
    if !config.use_colors {
        return text;
    }
    text.bold().to_string()
}

/// Colorize a gender tag by gender.
pub(crate) fn colorize_gender(gender: Gender, config: &OutputConfig) -> String {
    let text = gender.token();
    if !config.use_colors {
        return text.to_string();
    }
    match gender {
        Gender::Male => text.blue().to_string(),
        Gender::Female => text.magenta().to_string(),
    }
}

/// Colorize a count (green).
pub(crate) fn colorize_count(count: usize, config: &OutputConfig) -> String {
    let text = count.to_string();
    if !config.use_colors {
        return text;
    }
    text.green().to_string()
}

/// Apply dimmed style to text (for field labels).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
