use std::time::Duration;

/// Rolling frame-time accumulator; reports once per `interval` frames.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: u32,
    frames: u32,
    total: Duration,
}

impl FrameStats {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            total: Duration::ZERO,
        }
    }

    /// Add one frame's duration. Returns the average in milliseconds when the
    /// window is full, then starts a new window.
    pub fn record(&mut self, frame: Duration) -> Option<f64> {
        self.frames += 1;
        self.total += frame;
        if self.frames < self.interval {
            return None;
        }
        let avg_ms = self.total.as_secs_f64() * 1000.0 / self.frames as f64;
        self.frames = 0;
        self.total = Duration::ZERO;
        Some(avg_ms)
    }
}
