//! Terminal styling helpers
//!
//! Colors are only applied when stderr supports them.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Check mark used in summaries
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize: Display + Sized {
    /// De-emphasized text
    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.dimmed())
            .to_string()
    }

    /// Bold text
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.bold())
            .to_string()
    }

    /// Highlighted values (refs, counts)
    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.cyan())
            .to_string()
    }

    /// Success text
    fn success(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.green())
            .to_string()
    }

    /// Errors
    fn error(&self) -> String {
        self.if_supports_color(Stream::Stderr, |t| t.red())
            .to_string()
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style for network phases
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
}
