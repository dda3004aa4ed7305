/// Coalesces bursts of events into at most one frame callback.
///
/// Scroll events can fire many times per frame. The listener calls
/// [`FrameGate::request`] and only schedules `requestAnimationFrame` when it
/// returns true; the frame callback calls [`FrameGate::complete`] once it has
/// sampled.
#[derive(Debug, Default, Clone)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
