//! Colored status output for the terminal.
//!
//! Status lines go to stderr so they never mix with the build and request
//! logs the commands write to stdout. `owo-colors` respects NO_COLOR and
//! terminal capabilities on its own; [`should_use_color`] is exposed for
//! callers that want the answer explicitly.

use owo_colors::OwoColorize;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

/// Check if color output should be enabled.
///
/// Respects the NO_COLOR and FORCE_COLOR environment variables, falling back
/// to terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support based on environment.
///
/// Should be called early in the application lifecycle.
pub fn init_colors() {
    let _ = should_use_color();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_do_not_panic() {
        success("Success message");
        info("Info message");
        warning("Warning message");
        error("Error message");
    }

    #[test]
    fn init_colors_does_not_panic() {
        init_colors();
    }
}
