use colored::*;

use crate::banner::Banner;
use crate::error::Result;

/// Helper to print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[WARNING]".yellow().bold(), message.yellow());
}

/// Helper to print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".bright_red().bold(), message.bright_red());
}

/// Renders banner lines as a JSON array of strings.
pub fn banner_json(banner: &Banner) -> Result<String> {
    Ok(serde_json::to_string(banner.lines())?)
}

/// One-line summary printed after a copy, e.g. `[COPIED] 3 lines (81 columns)`.
pub fn copied_summary(banner: &Banner) -> String {
    let lines = banner.lines().len();
    let columns = banner.middle().chars().count();
    format!(
        "{} {} line{} ({} columns)",
        "[COPIED]".bright_green().bold(),
        lines,
        if lines == 1 { "" } else { "s" },
        columns
    )
}
