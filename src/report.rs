//! User-facing diagnostics on stderr

use colored::Colorize;

/// Report a recoverable problem; the run continues
pub fn warn(code: &str, message: impl std::fmt::Display) {
    eprintln!("{} {}", format!("warning[{}]:", code).as_str().yellow().bold(), message);
}

/// Report a problem that ends the run early
pub fn error(message: impl std::fmt::Display) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Turn colors off for the rest of the process
pub fn disable_color() {
    colored::control::set_override(false);
}
