/// Source of "call me on the next frame" callbacks.
///
/// At most one request is outstanding; requesting again while pending is a
/// no-op, so the loop can never fan out into parallel chains.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
    fn is_pending(&self) -> bool;

    /// Called by the animator when the pending frame starts running.
    fn frame_started(&mut self) {}
}

/// Scheduler driven by hand, for tests and headless stepping.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    pending: bool,
    pub requests: u64,
    pub cancellations: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        if !self.pending {
            self.pending = true;
            self.requests += 1;
        }
    }

    fn cancel_frame(&mut self) {
        if self.pending {
            self.pending = false;
            self.cancellations += 1;
        }
    }

    fn is_pending(&self) -> bool {
        self.pending
    }

    fn frame_started(&mut self) {
        self.pending = false;
    }
}
