use super::{InputWiring, Listener};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Horizontal position of a mouse event or of the first active touch.
#[inline]
pub fn client_x(ev: &web::Event) -> Option<f64> {
    if let Some(touch) = ev.dyn_ref::<web::TouchEvent>() {
        return touch.touches().get(0).map(|t| t.client_x() as f64);
    }
    ev.dyn_ref::<web::MouseEvent>().map(|m| m.client_x() as f64)
}

pub fn wire_pointer(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(6);
    for kind in ["mousedown", "touchstart"] {
        listeners.push(wire_down(w, kind)?);
    }
    for kind in ["mousemove", "touchmove"] {
        listeners.push(wire_move(w, kind)?);
    }
    for kind in ["mouseup", "touchend"] {
        listeners.push(wire_up(w, kind)?);
    }
    Ok(listeners)
}

fn wire_down(w: &InputWiring, kind: &'static str) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(w.window.as_ref(), kind, true, move |ev: web::Event| {
        let Some(x) = client_x(&ev) else {
            return;
        };
        let in_region = dom::event_in_region(&ev, &w2.root);
        w2.ctx.borrow_mut().engine.on_drag_start(x, in_region);
    })
}

fn wire_move(w: &InputWiring, kind: &'static str) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(w.window.as_ref(), kind, true, move |ev: web::Event| {
        let Some(x) = client_x(&ev) else {
            return;
        };
        let in_region = dom::event_in_region(&ev, &w2.root);
        w2.ctx.borrow_mut().engine.on_drag_move(x, in_region);
    })
}

/// Releases anywhere on the page, so a drag can never get stuck.
fn wire_up(w: &InputWiring, kind: &'static str) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(w.window.as_ref(), kind, true, move |_ev: web::Event| {
        w2.ctx.borrow_mut().engine.on_drag_end();
    })
}
