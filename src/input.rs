use super::constants::{
    DOM_DELTA_LINE, DOM_DELTA_PAGE, DOM_DELTA_PIXEL, WHEEL_LINE_HEIGHT_PX, WHEEL_PAGE_HEIGHT_PX,
};
use instant::Instant;
use std::time::Duration;

// ---------------- Wheel helpers ----------------
/// Convert a wheel delta in any `deltaMode` to pixels.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32) -> f64 {
    match delta_mode {
        DOM_DELTA_PIXEL => delta,
        DOM_DELTA_LINE => delta * WHEEL_LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * WHEEL_PAGE_HEIGHT_PX,
        _ => delta,
    }
}

// ---------------- Resize debounce ----------------
/// Tracks viewport width and reports when a genuine change has settled.
///
/// `observe` is fed from the resize listener; `take_due` is polled from the
/// frame loop so the engine is only re-measured once per burst.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    last_width: f64,
    pending_since: Option<Instant>,
    window: Duration,
}

impl ResizeDebounce {
    pub fn new(width: f64, window: Duration) -> Self {
        Self {
            last_width: width,
            pending_since: None,
            window,
        }
    }

    /// Record a resize event. Height-only resizes are not a change.
    pub fn observe(&mut self, width: f64, now: Instant) -> bool {
        if width == self.last_width {
            return false;
        }
        self.last_width = width;
        self.pending_since = Some(now);
        true
    }

    /// True once, when the last change is at least `window` old.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= self.window => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.last_width
    }
}
