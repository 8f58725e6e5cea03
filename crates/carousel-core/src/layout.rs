//! Strip geometry as reported by the host.
//!
//! The engine never measures anything itself. A [`LayoutProvider`] is asked
//! for fresh [`LayoutBounds`] at construction and on every resize, and the
//! bounds are validated here before they can reach the scroll state.

use crate::error::{CarouselError, Result};

/// Geometry of the looping strip.
///
/// `item_count` includes the loop-padding clones (original count + 2).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBounds {
    pub item_width: f64,
    pub total_width: f64,
    pub item_count: usize,
}

impl LayoutBounds {
    pub fn new(item_width: f64, total_width: f64, item_count: usize) -> Self {
        Self {
            item_width,
            total_width,
            item_count,
        }
    }

    /// Reject geometry the wrap correction cannot work with.
    ///
    /// The strip must be at least two items wide, otherwise the backward wrap
    /// lands at or below `-item_width` and never climbs back.
    pub fn validate(&self) -> Result<()> {
        if self.item_count < 1 {
            return Err(CarouselError::NoItems);
        }
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(CarouselError::InvalidItemWidth(self.item_width));
        }
        if !self.total_width.is_finite() || self.total_width < 2.0 * self.item_width {
            return Err(CarouselError::InvalidTotalWidth {
                total: self.total_width,
                item: self.item_width,
            });
        }
        Ok(())
    }

    /// Offset the strip jumps to when it runs off the end moving forward.
    #[inline]
    pub fn forward_wrap_target(&self) -> f64 {
        -self.item_width
    }

    /// Offset the strip jumps to when it runs off the start moving backward.
    #[inline]
    pub fn backward_wrap_target(&self) -> f64 {
        self.total_width - 2.0 * self.item_width
    }
}

/// Source of strip geometry, implemented by the host.
pub trait LayoutProvider {
    fn measure(&self) -> LayoutBounds;

    /// Logical width of the viewport, used to pick the autoscroll speed.
    fn viewport_width(&self) -> f64;
}

/// Fixed geometry, for hosts that already know their layout and for tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticLayout {
    pub bounds: LayoutBounds,
    pub viewport_width: f64,
}

impl StaticLayout {
    pub fn new(bounds: LayoutBounds, viewport_width: f64) -> Self {
        Self {
            bounds,
            viewport_width,
        }
    }
}

impl LayoutProvider for StaticLayout {
    fn measure(&self) -> LayoutBounds {
        self.bounds
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}

pub(crate) fn validate_viewport_width(width: f64) -> Result<f64> {
    if width.is_finite() && width >= 0.0 {
        Ok(width)
    } else {
        Err(CarouselError::InvalidViewportWidth(width))
    }
}
