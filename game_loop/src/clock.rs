use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacing.
///
/// Each frame, the caller brackets its work with `begin_frame` and
/// `end_frame`; the clock sleeps off whatever is left of the per-frame
/// budget. Overrunning frames are not compensated: a slow frame simply
/// stretches total elapsed time, there is no catch-up or frame skipping.
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(target_tps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / target_tps.max(1),
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Mark the start of a frame's work
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Sleep off the remaining frame budget, if any
    pub fn end_frame(&self) {
        let elapsed = self.frame_start.elapsed();
        if let Some(remaining) = self.budget.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
