//! Progress display for batch generation runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Runs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Single-bar progress display for a batch of generation runs
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the number of runs
    pub fn new(total_runs: usize) -> Self {
        let bar = ProgressBar::new(total_runs as u64);
        bar.set_style(BATCH_STYLE.clone());
        Self { bar }
    }

    /// Mark one run completed
    pub fn complete_run(&self) {
        self.bar.inc(1);
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_with_message("All runs completed");
    }
}
