//! The scroll-state engine: per-frame integration, wrap-around and input
//! unification for an infinitely looping horizontal strip.
//!
//! Everything here is a plain synchronous call made by the host on a single
//! thread. Input handlers only mutate [`ScrollState`]; [`ScrollEngine::tick`]
//! is the only place the state is integrated and published.

use crate::config::ScrollConfig;
use crate::error::Result;
use crate::layout::{validate_viewport_width, LayoutBounds, LayoutProvider};
use crate::sink::{FrameScheduler, RenderSink};
use crate::state::{direction, DragGesture, Frame, ScrollMode, ScrollState, WrapJump};

pub struct ScrollEngine<S, F: FrameScheduler> {
    state: ScrollState,
    bounds: LayoutBounds,
    viewport_width: f64,
    velocity_magnitude: f64,
    drag: Option<DragGesture>,
    config: ScrollConfig,
    sink: S,
    scheduler: F,
    pending: Option<F::Handle>,
    running: bool,
}

impl<S: RenderSink, F: FrameScheduler> ScrollEngine<S, F> {
    /// Measure the layout once and build the engine at rest, or scrolling
    /// forward if `config.autoplay` is set.
    ///
    /// Fails on empty or degenerate geometry rather than running with bounds
    /// that would break the wrap correction.
    pub fn new(
        layout: &impl LayoutProvider,
        sink: S,
        scheduler: F,
        config: ScrollConfig,
    ) -> Result<Self> {
        config.validate()?;
        let bounds = layout.measure();
        bounds.validate()?;
        let viewport_width = validate_viewport_width(layout.viewport_width())?;
        let velocity_magnitude = config.velocity_magnitude(viewport_width);
        let velocity = if config.autoplay {
            velocity_magnitude
        } else {
            0.0
        };
        log::debug!(
            "[engine] new item_width={:.1} total_width={:.1} items={} velocity={:.2}",
            bounds.item_width,
            bounds.total_width,
            bounds.item_count,
            velocity
        );
        Ok(Self {
            state: ScrollState::new(config.ease, velocity),
            bounds,
            viewport_width,
            velocity_magnitude,
            drag: None,
            config,
            sink,
            scheduler,
            pending: None,
            running: false,
        })
    }

    // ---------------- Frame loop ----------------

    /// Request the first frame. Calling it while running does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.schedule_next();
    }

    /// Cancel the outstanding frame request and stop rescheduling.
    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame.
    ///
    /// Call it from the frame the scheduler delivered; the pending request is
    /// considered consumed and a new one is made while the engine is running.
    pub fn tick(&mut self) -> Frame {
        self.pending = None;

        if self.drag.is_none() {
            self.state.target += self.state.velocity;
        }
        let wrap = self.wrap_around();
        self.state.ease_toward_target();

        let offset = self.state.current;
        self.sink.apply_offset(offset);

        if self.running {
            self.schedule_next();
        }
        Frame { offset, wrap }
    }

    /// A refused request ends the loop; `start` can pick it up again.
    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            self.running = false;
            log::warn!("[engine] scheduler refused the next frame, loop stopped");
        }
    }

    /// Teleport `current` across the seam when it has run off either end in
    /// the direction of travel. `target` is left alone so the next easing
    /// step keeps the momentum it carries.
    fn wrap_around(&mut self) -> Option<WrapJump> {
        let from = self.state.current;
        let to = if from >= self.bounds.total_width && self.state.velocity > 0.0 {
            self.bounds.forward_wrap_target()
        } else if from <= -self.bounds.item_width && self.state.velocity < 0.0 {
            self.bounds.backward_wrap_target()
        } else {
            return None;
        };
        self.state.current = to;
        Some(WrapJump { from, to })
    }

    // ---------------- Input ----------------

    /// Wheel input. Only the sign of `delta_y` matters; anything not
    /// positive, zero included, scrolls backward.
    ///
    /// Outside the active region the event is ignored and should be left to
    /// the page. A non-finite delta is dropped.
    pub fn on_wheel(&mut self, delta_y: f64, in_region: bool) {
        if !in_region || !delta_y.is_finite() {
            return;
        }
        let scroll_delta = delta_y * self.config.wheel_damping;
        let new_velocity = if scroll_delta > 0.0 {
            self.velocity_magnitude
        } else {
            -self.velocity_magnitude
        };
        if direction(new_velocity) != direction(self.state.velocity) {
            // drop stale displacement so the reversal doesn't glide backwards first
            self.state.target = self.state.current;
            log::debug!("[wheel] reverse velocity={:.2}", new_velocity);
        }
        self.state.velocity = new_velocity;
    }

    pub fn on_drag_start(&mut self, x: f64, in_region: bool) {
        if !in_region || !x.is_finite() {
            return;
        }
        self.state.position = self.state.current;
        self.drag = Some(DragGesture {
            start_x: x,
            origin: self.state.position,
        });
        log::debug!("[drag] start x={:.1} origin={:.1}", x, self.state.position);
    }

    /// Point `target` at the dragged position. `current` catches up through
    /// the normal easing step.
    pub fn on_drag_move(&mut self, x: f64, in_region: bool) {
        if !in_region || !x.is_finite() {
            return;
        }
        if let Some(drag) = &self.drag {
            self.state.target = drag.target_for(x, self.config.drag_multiplier);
        }
    }

    /// End the gesture wherever the pointer is. Velocity is whatever the
    /// wheel last set.
    pub fn on_drag_end(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("[drag] end target={:.1}", self.state.target);
        }
    }

    // ---------------- Layout ----------------

    /// Re-measure after the host saw the viewport width change.
    ///
    /// Scroll state is kept as is. Identical geometry is a no-op; invalid
    /// geometry is rejected and the previous bounds stay in effect.
    pub fn on_resize(&mut self, layout: &impl LayoutProvider) -> Result<()> {
        let bounds = layout.measure();
        let viewport_width = layout.viewport_width();
        if bounds == self.bounds && viewport_width == self.viewport_width {
            return Ok(());
        }
        if let Err(e) = bounds
            .validate()
            .and_then(|_| validate_viewport_width(viewport_width).map(|_| ()))
        {
            log::warn!("[engine] resize rejected: {}", e);
            return Err(e);
        }
        self.bounds = bounds;
        self.viewport_width = viewport_width;
        self.velocity_magnitude = self.config.velocity_magnitude(viewport_width);
        log::debug!(
            "[engine] resize item_width={:.1} total_width={:.1} viewport={:.0} speed={:.2}",
            bounds.item_width,
            bounds.total_width,
            viewport_width,
            self.velocity_magnitude
        );
        Ok(())
    }

    // ---------------- Accessors ----------------

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn bounds(&self) -> &LayoutBounds {
        &self.bounds
    }

    pub fn mode(&self) -> ScrollMode {
        if self.drag.is_some() {
            ScrollMode::Dragging
        } else {
            ScrollMode::Free
        }
    }

    pub fn drag(&self) -> Option<&DragGesture> {
        self.drag.as_ref()
    }

    pub fn velocity_magnitude(&self) -> f64 {
        self.velocity_magnitude
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }
}
