// file: src/pipeline/progress.rs
// description: live encode progress bar driven by parsed transcoder status lines
// reference: uses indicatif for progress bars

use crate::parser::{ProgressUpdate, format_hhmmss};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Instant;

pub const BAR_WIDTH: usize = 60;
const BAR_SCALE: u64 = 10_000;

/// Everything shown for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressFrame {
    pub fraction: f64,
    pub elapsed_secs: u64,
    pub eta_secs: u64,
}

impl ProgressFrame {
    pub fn new(fraction: f64, elapsed_secs: u64, eta_secs: u64) -> Self {
        Self {
            fraction: fraction.clamp(0.0, 1.0),
            elapsed_secs,
            eta_secs,
        }
    }

    pub fn position(&self) -> u64 {
        (self.fraction * BAR_SCALE as f64).round() as u64
    }

    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0) as u32
    }

    pub fn message(&self) -> String {
        format!(
            "{}% Elapsed: {} | Remaining: {}",
            self.percent(),
            format_hhmmss(self.elapsed_secs),
            format_hhmmss(self.eta_secs)
        )
    }
}

/// Redraws a single terminal line in place, skipping updates that repeat the
/// last rendered percentage.
pub struct ProgressTracker {
    bar: ProgressBar,
    last_rendered: Option<f64>,
    redraws: usize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stdout())
    }

    /// Tracks state without drawing anything.
    pub fn hidden() -> Self {
        Self::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(BAR_SCALE), target);
        bar.set_style(create_bar_style());

        Self {
            bar,
            last_rendered: None,
            redraws: 0,
            start_time: Instant::now(),
        }
    }

    /// Returns whether the bar was redrawn.
    pub fn update(&mut self, update: &ProgressUpdate) -> bool {
        let fraction = update.fraction();
        if self.last_rendered == Some(fraction) {
            return false;
        }

        let frame = ProgressFrame::new(
            fraction,
            self.start_time.elapsed().as_secs(),
            update.eta_seconds(),
        );

        self.bar.set_position(frame.position());
        self.bar.set_message(frame.message());

        self.last_rendered = Some(fraction);
        self.redraws += 1;
        true
    }

    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn last_rendered(&self) -> Option<f64> {
        self.last_rendered
    }

    /// Leaves the last frame on screen and moves to a fresh line.
    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(&format!("[{{bar:{BAR_WIDTH}}}] {{msg}}"))
        .expect("Failed to create progress bar template")
        .progress_chars("■ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(percent: f64) -> ProgressUpdate {
        ProgressUpdate {
            percent,
            eta: "00h05m10s".to_string(),
        }
    }

    #[test]
    fn test_identical_percentages_redraw_once() {
        let mut tracker = ProgressTracker::hidden();

        assert!(tracker.update(&update(45.2)));
        assert!(!tracker.update(&update(45.2)));
        assert_eq!(tracker.redraws(), 1);
    }

    #[test]
    fn test_changed_percentage_redraws() {
        let mut tracker = ProgressTracker::hidden();

        tracker.update(&update(45.2));
        assert!(tracker.update(&update(45.3)));
        assert_eq!(tracker.redraws(), 2);
        assert_eq!(tracker.last_rendered(), Some(45.3 / 100.0));
    }

    #[test]
    fn test_frame_message() {
        let frame = ProgressFrame::new(0.25, 3, 310);
        assert_eq!(frame.percent(), 25);
        assert_eq!(frame.position(), 2500);
        assert_eq!(frame.message(), "25% Elapsed: 00:00:03 | Remaining: 00:05:10");
    }

    #[test]
    fn test_bar_fill_matches_cell_count() {
        for fraction in [0.0167, 0.3333, 0.5, 0.9999] {
            let frame = ProgressFrame::new(fraction, 0, 0);
            let cells = (frame.position() * BAR_WIDTH as u64 / BAR_SCALE) as usize;
            assert_eq!(cells, (BAR_WIDTH as f64 * fraction) as usize, "fraction {fraction}");
        }
        assert_eq!(ProgressFrame::new(0.0167, 0, 0).position(), 167);
    }

    #[test]
    fn test_frame_clamps_fraction() {
        let frame = ProgressFrame::new(1.5, 0, 0);
        assert_eq!(frame.position(), BAR_SCALE);
        assert_eq!(frame.percent(), 100);
    }
}
