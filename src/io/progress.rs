//! Progress display for batch case processing

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Cases: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the cases of a batch
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl ProgressManager {
    /// Create a visible progress bar for `case_count` cases
    pub fn new(case_count: usize) -> Self {
        let bar = ProgressBar::new(case_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
        }
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(case_count: usize) -> Self {
        let manager = Self::new(case_count);
        manager.bar.set_draw_target(ProgressDrawTarget::hidden());
        manager
    }

    /// Show the case currently being analyzed
    pub fn start_case(&self, case_id: &str) {
        self.bar.set_message(case_id.to_string());
    }

    /// Count a finished or skipped case
    pub fn complete_case(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Cases finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Close the bar with a final tally
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} cases done", self.completed));
    }
}
