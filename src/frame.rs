use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom::DomLayout;
use crate::input::ResizeDebounce;
use crate::render::DomSink;
use carousel_core::{FrameScheduler, ScrollEngine};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
pub type Engine = ScrollEngine<DomSink, RafScheduler>;

/// `requestAnimationFrame` as a frame scheduler.
///
/// The callback slot is filled once the host state exists; until then every
/// request is refused.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let window = web::window()?;
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match window.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

/// Everything one mounted carousel mutates from its event and frame callbacks.
pub struct FrameContext {
    pub engine: Engine,
    pub layout: DomLayout,
    pub resize: ResizeDebounce,
}

impl FrameContext {
    pub fn new(engine: Engine, layout: DomLayout) -> Self {
        let width = engine.viewport_width();
        Self {
            engine,
            layout,
            resize: ResizeDebounce::new(width, Duration::from_millis(RESIZE_DEBOUNCE_MS)),
        }
    }

    pub fn frame(&mut self) {
        if self.resize.take_due(Instant::now()) {
            if let Err(e) = self.engine.on_resize(&self.layout) {
                log::warn!("[resize] keeping previous layout: {}", e);
            }
        }
        self.engine.tick();
    }
}

/// Fill the callback slot and request the first frame.
///
/// The callback holds the context weakly so dropping the carousel ends the
/// loop even if a frame is still queued.
pub fn start_loop(ctx: &Rc<RefCell<FrameContext>>, callback: &FrameCallback) {
    let weak: Weak<RefCell<FrameContext>> = Rc::downgrade(ctx);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));
    ctx.borrow_mut().engine.start();
}
