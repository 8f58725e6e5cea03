#![cfg(target_arch = "wasm32")]
use crate::constants::{ITEM_SELECTOR, LIST_SELECTOR, ROOT_SELECTOR};
use anyhow::anyhow;
use carousel_core::{ScrollConfig, ScrollEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// A mounted carousel. Dropping it (or calling `destroy`) stops the frame
/// loop, removes every listener and restores the original markup.
#[wasm_bindgen]
pub struct Carousel {
    ctx: Rc<RefCell<frame::FrameContext>>,
    callback: frame::FrameCallback,
    listeners: Vec<events::Listener>,
    list: web::Element,
}

#[wasm_bindgen]
impl Carousel {
    pub fn destroy(self) {}

    pub fn stop(&self) {
        self.ctx.borrow_mut().engine.stop();
    }

    pub fn resume(&self) {
        self.ctx.borrow_mut().engine.start();
    }

    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f64 {
        self.ctx.borrow().engine.state().current
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.ctx.borrow_mut().engine.stop();
        self.listeners.clear();
        self.callback.borrow_mut().take();
        self.ctx.borrow().engine.sink().reset();
        dom::remove_clones(&self.list);
        log::info!("[carousel] unmounted");
    }
}

thread_local! {
    static MOUNTED: RefCell<Vec<Carousel>> = const { RefCell::new(Vec::new()) };
}

fn mount_element(root: web::Element, config: ScrollConfig) -> anyhow::Result<Carousel> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let list = root
        .query_selector(LIST_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing {}", LIST_SELECTOR))?;

    let items = dom::query_items(&list, ITEM_SELECTOR)?;
    if items.is_empty() {
        return Err(anyhow!("no {} inside {}", ITEM_SELECTOR, LIST_SELECTOR));
    }
    let rendered = dom::pad_with_clones(&list, ITEM_SELECTOR, &items)?;
    let layout = dom::DomLayout::new(&rendered);

    let callback: frame::FrameCallback = Rc::new(RefCell::new(None));
    let engine = match ScrollEngine::new(
        &layout,
        render::DomSink::new(rendered),
        frame::RafScheduler::new(callback.clone()),
        config,
    ) {
        Ok(e) => e,
        Err(e) => {
            dom::remove_clones(&list);
            return Err(e.into());
        }
    };
    log::info!(
        "[carousel] mounted items={} item_width={:.1} total_width={:.1}",
        engine.bounds().item_count,
        engine.bounds().item_width,
        engine.bounds().total_width
    );

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(engine, layout)));
    let listeners = match events::wire_input_handlers(&events::InputWiring {
        window,
        root,
        ctx: ctx.clone(),
    }) {
        Ok(l) => l,
        Err(e) => {
            dom::remove_clones(&list);
            return Err(e);
        }
    };
    frame::start_loop(&ctx, &callback);

    Ok(Carousel {
        ctx,
        callback,
        listeners,
        list,
    })
}

/// Mount a carousel on the first element matching `root_selector`.
#[wasm_bindgen]
pub fn mount(root_selector: &str) -> Result<Carousel, JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .query_selector(root_selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing {}", root_selector)))?;
    mount_element(root, ScrollConfig::default()).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down every carousel mounted at startup.
#[wasm_bindgen]
pub fn unmount_all() {
    MOUNTED.with(|m| m.borrow_mut().clear());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("carousel-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let roots = document
        .query_selector_all(ROOT_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?;
    for i in 0..roots.length() {
        let Some(root) = roots.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        match mount_element(root, ScrollConfig::default()) {
            Ok(c) => MOUNTED.with(|m| m.borrow_mut().push(c)),
            Err(e) => log::error!("[carousel] mount failed: {:#}", e),
        }
    }
    Ok(())
}
