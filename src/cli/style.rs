//! Terminal styling helpers
//!
//! Colors are applied unconditionally; `anstream` strips them when stdout is
//! not a terminal.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styling shorthand for report lines
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Highlighted value (branch names, repo names)
    fn accent(&self) -> String;
    /// Positive result
    fn success(&self) -> String;
    /// Problem that did not stop the run
    fn warn(&self) -> String;
    /// Section lead-in
    fn emphasis(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }
}
