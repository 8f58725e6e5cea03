use super::{InputWiring, Listener};
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Non-passive so the page scroll can be suppressed inside the carousel.
pub fn wire_wheel(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(w.window.as_ref(), "wheel", false, move |ev: web::Event| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        let in_region = dom::event_in_region(&ev, &w2.root);
        if !in_region {
            return;
        }
        ev.prevent_default();
        let delta = input::wheel_delta_px(wheel.delta_y(), wheel.delta_mode());
        w2.ctx.borrow_mut().engine.on_wheel(delta, in_region);
    })
}
