//! Row-level progress display for the grid pass

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports completed grid rows
///
/// Cheap to share between worker threads; a hidden reporter draws nothing.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressReporter {
    /// Create a visible progress bar for `rows` grid rows
    pub fn new(rows: usize, label: &str) -> Self {
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(label.to_string());
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Record one finished grid row
    pub fn row_done(&self) {
        self.bar.inc(1);
    }

    /// Rows finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Close the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
