//! Output and frame-clock seams.

/// Receives the authoritative offset once per frame.
///
/// Implementations apply the same horizontal translation to every rendered
/// item, loop-padding clones included.
pub trait RenderSink {
    fn apply_offset(&mut self, offset_px: f64);
}

impl<F: FnMut(f64)> RenderSink for F {
    fn apply_offset(&mut self, offset_px: f64) {
        self(offset_px)
    }
}

/// A "call me next frame" capability.
///
/// The engine asks for exactly one frame per tick and keeps the returned
/// handle so `stop` can cancel it.
pub trait FrameScheduler {
    type Handle;

    /// Returns `None` if the platform refused to schedule.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Scheduler for hosts that call `tick` themselves.
///
/// It only records requests; nothing ever fires on its own.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<u64>,
    pub requested: u64,
    pub cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The outstanding request, if any.
    pub fn pending(&self) -> Option<u64> {
        self.pending
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> Option<u64> {
        self.next_id += 1;
        self.requested += 1;
        self.pending = Some(self.next_id);
        self.pending
    }

    fn cancel_frame(&mut self, handle: u64) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled += 1;
    }
}
