//! Spinner-backed progress for the generate command

use crate::cli::style::{Stylize, spinner_style};
use anstream::eprintln;
use async_trait::async_trait;
use changelog_gen::changelog::ProgressCallback;
use changelog_gen::types::CommitRange;
use indicatif::ProgressBar;
use std::time::Duration;

/// Progress reporter drawing a spinner on stderr
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Start a spinner with an initial message
    pub fn spinner(message: String) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    /// Remove the spinner from the terminal
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_merged_found(&self, range: &CommitRange, count: usize) {
        if count > 0 {
            self.spinner.suspend(|| {
                eprintln!(
                    "Found {} merged PRs between {}.",
                    count.accent(),
                    range.emphasis()
                );
            });
        }
    }

    async fn on_fetch_pr(&self, number: u64) {
        self.spinner.set_message(format!("Reading #{number}"));
    }
}
