use crate::constants::STATS_INTERVAL_FRAMES;
use instant::Instant;

/// Rolling frame-interval counter, logged when the `debug` parameter is set.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window_start: Instant,
    frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn reset(&mut self) {
        self.window_start = Instant::now();
        self.frames = 0;
    }

    /// Count one frame. Every `STATS_INTERVAL_FRAMES` frames returns the
    /// mean interval in milliseconds and starts a new window.
    pub fn record(&mut self) -> Option<f64> {
        self.frames += 1;
        if self.frames < STATS_INTERVAL_FRAMES {
            return None;
        }
        let now = Instant::now();
        let elapsed = now - self.window_start;
        let mean_ms = elapsed.as_secs_f64() * 1000.0 / self.frames as f64;
        self.window_start = now;
        self.frames = 0;
        Some(mean_ms)
    }
}
