use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::prelude::*;

/// How long each region label stays on screen at minimum, so that a fast
/// response does not blink past before anyone can read it.
pub const MIN_REGION_DISPLAY: Duration = Duration::from_millis(250);

pub struct Progress {
    bar: ProgressBar,
    min_display: Duration,
}

impl Progress {
    pub fn try_new(n_regions: u64, min_display: Duration) -> Result<Self> {
        let bar = ProgressBar::new(n_regions).with_style(
            ProgressStyle::with_template("{spinner} {msg:<15} [{pos}/{len}]")
                .context("failed to parse the progress template")?,
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Ok(Self { bar, min_display })
    }

    /// Invisible and without pacing, for tests.
    #[cfg(test)]
    pub fn hidden() -> Self {
        Self { bar: ProgressBar::hidden(), min_display: Duration::ZERO }
    }

    /// Show the label and hold it via the returned guard.
    pub fn enter(&self, label: &str) -> DisplayedRegion<'_> {
        self.bar.set_message(label.to_owned());
        DisplayedRegion { progress: self, since: Instant::now() }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

pub struct DisplayedRegion<'a> {
    progress: &'a Progress,
    since: Instant,
}

impl DisplayedRegion<'_> {
    /// Advance the bar, keeping the label visible for the remainder of the
    /// minimum display duration first.
    pub async fn leave(self) {
        if let Some(remaining) = self.progress.min_display.checked_sub(self.since.elapsed()) {
            sleep(remaining).await;
        }
        self.progress.bar.inc(1);
    }
}
