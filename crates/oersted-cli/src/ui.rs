//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Build a header line.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    if color {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    } else {
        format!("=== {text} ===")
    }
}

/// Build an error line.
#[must_use]
pub fn error_line(text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", style("[ERROR]").red().bold())
    } else {
        format!("[ERROR] {text}")
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text, !is_color_disabled()));
}
