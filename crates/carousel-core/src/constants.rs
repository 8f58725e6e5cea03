// Shared tuning constants for the scroll engine, used by every host.

// Easing
pub const DEFAULT_EASE: f64 = 0.1; // lerp factor per frame toward target

// Wheel
pub const WHEEL_DAMPING: f64 = 0.1; // scales raw deltaY before taking its sign

// Drag
pub const DRAG_MULTIPLIER: f64 = 2.0; // content travel per pointer pixel (inverted)

// Autoscroll speed, pixels per frame
pub const VELOCITY_DESKTOP: f64 = 1.0;
pub const VELOCITY_MOBILE: f64 = 0.5;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewports at or below this width are "mobile"

// Layout
pub const LOOP_PADDING_CLONES: usize = 2; // one clone of the last item before, one of the first after

#[inline]
pub fn velocity_magnitude_for(viewport_width: f64, breakpoint: f64, desktop: f64, mobile: f64) -> f64 {
    if viewport_width <= breakpoint {
        mobile
    } else {
        desktop
    }
}
