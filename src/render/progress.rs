// file: src/render/progress.rs
// description: request spinner shown while a search is in flight
// reference: uses indicatif for progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_MILLIS: u64 = 80;

/// Spinner covering the in-flight request. Dropping the guard clears it,
/// so the indicator is hidden on every exit path.
pub struct SearchSpinner {
    bar: ProgressBar,
}

impl SearchSpinner {
    pub fn new(colored: bool) -> Self {
        Self::with_message(colored, "Searching...")
    }

    pub fn with_message(colored: bool, message: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();

        let template = if colored {
            "{spinner:.green} {msg}"
        } else {
            "{spinner} {msg}"
        };

        bar.set_style(
            ProgressStyle::default_spinner()
                .template(template)
                .expect("Failed to create spinner template"),
        );
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(TICK_MILLIS));

        Self { bar }
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn is_cleared(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Drop for SearchSpinner {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}
