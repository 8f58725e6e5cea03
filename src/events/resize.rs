use super::{InputWiring, Listener};
use crate::dom;
use instant::Instant;
use web_sys as web;

/// Only records the new width; the frame loop re-measures once it settles.
pub fn wire_resize(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(w.window.as_ref(), "resize", true, move |_ev: web::Event| {
        let width = dom::viewport_width();
        if w2.ctx.borrow_mut().resize.observe(width, Instant::now()) {
            log::debug!("[resize] viewport width {:.0}", width);
        }
    })
}
