use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::output;

/// A stderr progress bar advanced once per translated row.
pub struct RowProgress {
    progress_bar: ProgressBar,
}

impl RowProgress {
    /// In quiet mode the bar is created hidden.
    #[allow(clippy::unwrap_used)]
    pub fn new(total: usize) -> Self {
        let progress_bar = ProgressBar::new(total as u64);
        if output::is_quiet() {
            progress_bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        Self { progress_bar }
    }

    pub fn set_row(&self, item: &str) {
        self.progress_bar.set_message(item.to_string());
    }

    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for RowProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
