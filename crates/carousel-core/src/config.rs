use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Tuning for one engine instance. Fixed for the engine's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub ease: f64,
    pub wheel_damping: f64,
    pub drag_multiplier: f64,
    pub velocity_desktop: f64,
    pub velocity_mobile: f64,
    pub mobile_breakpoint_px: f64,
    /// Start scrolling forward at construction instead of at rest.
    pub autoplay: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE,
            wheel_damping: WHEEL_DAMPING,
            drag_multiplier: DRAG_MULTIPLIER,
            velocity_desktop: VELOCITY_DESKTOP,
            velocity_mobile: VELOCITY_MOBILE,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            autoplay: true,
        }
    }
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(CarouselError::InvalidEase(self.ease));
        }
        if !self.wheel_damping.is_finite() || self.wheel_damping <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "wheel_damping must be positive, got {}",
                self.wheel_damping
            )));
        }
        if !self.drag_multiplier.is_finite() {
            return Err(CarouselError::InvalidConfig(format!(
                "drag_multiplier must be finite, got {}",
                self.drag_multiplier
            )));
        }
        for (name, v) in [
            ("velocity_desktop", self.velocity_desktop),
            ("velocity_mobile", self.velocity_mobile),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(CarouselError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {v}"
                )));
            }
        }
        if !self.mobile_breakpoint_px.is_finite() {
            return Err(CarouselError::InvalidConfig(format!(
                "mobile_breakpoint_px must be finite, got {}",
                self.mobile_breakpoint_px
            )));
        }
        Ok(())
    }

    /// Autoscroll speed for a viewport of the given width.
    pub fn velocity_magnitude(&self, viewport_width: f64) -> f64 {
        velocity_magnitude_for(
            viewport_width,
            self.mobile_breakpoint_px,
            self.velocity_desktop,
            self.velocity_mobile,
        )
    }
}
