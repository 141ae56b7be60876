use std::time::{Duration, Instant};

use tracing::info;

use crate::parsing::fasta::ReadProgress;

/// How often progress is logged while reading
pub const PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Logs the fraction of the input consumed on a wall-clock cadence.
///
/// `tick` is called once per entry, so it only compares timestamps unless a
/// report is due.
pub struct ProgressReporter {
    progress: ReadProgress,
    interval: Duration,
    last_report: Instant,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(progress: ReadProgress) -> Self {
        Self::with_interval(progress, PROGRESS_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(progress: ReadProgress, interval: Duration) -> Self {
        Self {
            progress,
            interval,
            last_report: Instant::now(),
        }
    }

    /// Report if the interval has elapsed. Returns whether a report was logged.
    pub fn tick(&mut self, entries_read: u64) -> bool {
        if self.last_report.elapsed() < self.interval {
            return false;
        }

        info!(
            "{:.1}% of input processed ({entries_read} entries)",
            self.progress.fraction() * 100.0
        );
        self.last_report = Instant::now();
        true
    }
}
