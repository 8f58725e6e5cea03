//! Scroll-side state types owned by the engine.
//!
//! These types avoid referencing platform-specific APIs so they can be used
//! by the web host and by host-side tests alike.

/// The single mutable scroll record.
///
/// `current` is the eased, rendered offset; `target` is what it eases toward.
/// `position` is only meaningful during a drag: the value of `current` when
/// the gesture began.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub position: f64,
    pub current: f64,
    pub target: f64,
    pub velocity: f64,
    pub ease: f64,
}

impl ScrollState {
    pub fn new(ease: f64, velocity: f64) -> Self {
        Self {
            position: 0.0,
            current: 0.0,
            target: 0.0,
            velocity,
            ease,
        }
    }

    /// Linear interpolation of `current` toward `target`.
    #[inline]
    pub fn ease_toward_target(&mut self) {
        self.current = lerp(self.current, self.target, self.ease);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Velocity-driven autoscroll.
    Free,
    /// Pointer-driven; `target` follows the pointer and velocity is not applied.
    Dragging,
}

/// A drag in progress. Dropped on drag-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    pub start_x: f64,
    pub origin: f64,
}

impl DragGesture {
    /// Target for a pointer now at `x`. Travel is inverted and scaled.
    #[inline]
    pub fn target_for(&self, x: f64, multiplier: f64) -> f64 {
        self.origin + (self.start_x - x) * multiplier
    }
}

/// A wrap-around teleport performed during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapJump {
    pub from: f64,
    pub to: f64,
}

/// What one call to `tick` did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Offset pushed to the render sink.
    pub offset: f64,
    pub wrap: Option<WrapJump>,
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}

/// Sign as -1, 0 or 1. Unlike `f64::signum`, zero maps to 0.
#[inline]
pub(crate) fn direction(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
