//! CLI presenter for output formatting

use colored::*;

use crate::domain::interaction::ScriptStep;

use super::report::SessionReport;

/// Presenter for CLI output formatting.
///
/// Status goes to stderr; stdout carries only the report and config values.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    quiet: bool,
}

impl Presenter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// Suppress status lines, keeping errors and stdout output
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "ℹ".cyan(), message);
        }
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✓".green(), message);
        }
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Echo a replayed step to stderr
    pub fn step(&self, step: &ScriptStep) {
        if self.quiet {
            return;
        }
        match step {
            ScriptStep::Event(event) => eprintln!("{} {}", "▸".cyan(), event),
            ScriptStep::Wait(duration) => eprintln!("{} {}", "…".dimmed(), duration),
        }
    }

    /// Print a key-value pair to stdout
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print the session report as aligned key-value lines
    pub fn report(&self, report: &SessionReport) {
        for (key, value) in report.lines() {
            self.key_value(key, &value);
        }
        for failure in &report.failures {
            println!("  {} {}", "-".red(), failure.message);
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
