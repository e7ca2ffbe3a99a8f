//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::Theme;

/// A progress spinner for long-running probes.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show (non-TTY, tests).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Finish and replace the spinner line with a success message.
    pub fn finish_success(&self, theme: &Theme, msg: &str) {
        self.finish_with(format!(
            "{} {}",
            theme.success.apply_to("✓"),
            msg
        ));
    }

    /// Finish and replace the spinner line with an informational message.
    pub fn finish_info(&self, theme: &Theme, msg: &str) {
        self.finish_with(format!("{} {}", theme.info.apply_to("ℹ"), msg));
    }

    fn finish_with(&self, msg: String) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_creation() {
        let spinner = ProgressSpinner::hidden();
        drop(spinner);
    }

    #[test]
    fn spinner_finish_success() {
        let spinner = ProgressSpinner::hidden();
        spinner.finish_success(&Theme::plain(), "GPU detected");
    }

    #[test]
    fn spinner_finish_info() {
        let spinner = ProgressSpinner::hidden();
        spinner.finish_info(&Theme::plain(), "No accelerator found");
    }

    #[test]
    fn spinner_set_message() {
        let spinner = ProgressSpinner::hidden();
        spinner.set_message("Probing runtime...");
        spinner.finish_info(&Theme::plain(), "done");
    }
}
