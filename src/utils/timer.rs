// file: src/utils/timer.rs
// description: wall-clock timing for pipeline stages

use std::time::{Duration, Instant};
use tracing::debug;

pub struct StageTimer {
    stage: String,
    start: Instant,
}

impl StageTimer {
    pub fn new(stage: &str) -> Self {
        debug!("Starting stage: {}", stage);
        Self {
            stage: stage.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed stage: {} in {:.2}s",
            self.stage,
            elapsed.as_secs_f64()
        );
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = StageTimer::new("transcode");
        std::thread::sleep(Duration::from_millis(5));
        assert!(timer.finish() >= Duration::from_millis(5));
    }
}
