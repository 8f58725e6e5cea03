pub mod pointer;
pub mod resize;
pub mod wheel;

use crate::frame::FrameContext;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub root: web::Element,
    pub ctx: Rc<RefCell<FrameContext>>,
}

/// Window-level listeners, filtered by the region test, like the page-wide
/// handlers a carousel needs so a drag can be released anywhere.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(8);
    listeners.push(wheel::wire_wheel(w)?);
    listeners.extend(pointer::wire_pointer(w)?);
    listeners.push(resize::wire_resize(w)?);
    Ok(listeners)
}
