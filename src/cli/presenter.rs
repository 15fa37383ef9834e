//! CLI presenter for output formatting

use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
///
/// Status lines go to stderr; stdout only carries results.
pub struct Presenter {
    quiet: bool,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a presenter that suppresses info and warning lines
    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Create a spinner for a clipboard read.
    ///
    /// The spinner is hidden in quiet mode and when stderr is not a terminal.
    /// Clones share the same bar, so callbacks can drive it.
    pub fn spinner(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner
    }

    /// Show the spinner with a message
    pub fn start_spinner(spinner: &ProgressBar, message: &str) {
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠".yellow(), message);
        }
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a remediation hint below an error
    pub fn hint(&self, message: &str) {
        eprintln!("  {} {}", "hint:".yellow(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Confirm a saved file on stdout
    pub fn saved(&self, path: &str) {
        println!("{} Clipboard content saved to: {}", "✓".green(), path);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spinner_is_hidden() {
        let presenter = Presenter::quiet(true);
        assert!(presenter.spinner().is_hidden());
    }

    #[test]
    fn spinner_clones_share_state() {
        let presenter = Presenter::new();
        let spinner = presenter.spinner();
        let clone = spinner.clone();
        clone.set_message("Reading clipboard");
        assert_eq!(spinner.message(), "Reading clipboard");
        spinner.finish_and_clear();
    }
}
