//! Spinner shown while a draft request is in flight.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE_SPINNER: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Spinner on stderr; hidden in quiet and JSON modes.
pub struct DraftSpinner {
    bar: ProgressBar,
}

impl DraftSpinner {
    /// Start spinning with `message`, or create a hidden spinner.
    #[must_use]
    pub fn start(message: &str, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template(TEMPLATE_SPINNER)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Whether the spinner draws anything.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Stop and erase the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
