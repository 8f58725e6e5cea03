use crate::constants::CLONE_ATTRIBUTE;
use crate::render::ItemList;
use anyhow::anyhow;
use carousel_core::{LayoutBounds, LayoutProvider};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// True when the event's target sits inside `root`.
pub fn event_in_region(ev: &web::Event, root: &web::Element) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|node| root.contains(Some(&node)))
        .unwrap_or(false)
}

pub fn query_items(list: &web::Element, item_selector: &str) -> anyhow::Result<ItemList> {
    let nodes = list
        .query_selector_all(item_selector)
        .map_err(|e| anyhow!("{:?}", e))?;
    let mut items = ItemList::new();
    for i in 0..nodes.length() {
        if let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        {
            items.push(el);
        }
    }
    Ok(items)
}

/// Prepend a clone of the last item and append a clone of the first so the
/// strip has no visible seam when it wraps. Returns the rendered items in
/// document order.
pub fn pad_with_clones(
    list: &web::Element,
    item_selector: &str,
    items: &[web::HtmlElement],
) -> anyhow::Result<ItemList> {
    let (first, last) = match (items.first(), items.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(anyhow!("no items to clone")),
    };
    let clone_first = clone_item(first)?;
    let clone_last = clone_item(last)?;
    list.append_child(&clone_first)
        .map_err(|e| anyhow!("{:?}", e))?;
    let first_node: &web::Node = first;
    list.insert_before(&clone_last, Some(first_node))
        .map_err(|e| anyhow!("{:?}", e))?;
    query_items(list, item_selector)
}

fn clone_item(item: &web::HtmlElement) -> anyhow::Result<web::Element> {
    let node = item.clone_node_with_deep(true).map_err(|e| anyhow!("{:?}", e))?;
    let el: web::Element = node
        .dyn_into()
        .map_err(|_| anyhow!("cloned item is not an element"))?;
    _ = el.set_attribute(CLONE_ATTRIBUTE, "");
    Ok(el)
}

pub fn remove_clones(list: &web::Element) {
    let selector = format!("[{}]", CLONE_ATTRIBUTE);
    if let Ok(nodes) = list.query_selector_all(&selector) {
        for i in 0..nodes.length() {
            if let Some(n) = nodes.item(i) {
                if let Some(parent) = n.parent_node() {
                    _ = parent.remove_child(&n);
                }
            }
        }
    }
}

/// Layout provider backed by the live DOM.
///
/// Measures the real items only; the two clones are counted but not measured.
pub struct DomLayout {
    real_items: ItemList,
    rendered_count: usize,
}

impl DomLayout {
    pub fn new(rendered: &[web::HtmlElement]) -> Self {
        let real_items = rendered
            .iter()
            .filter(|el| !el.has_attribute(CLONE_ATTRIBUTE))
            .cloned()
            .collect();
        Self {
            real_items,
            rendered_count: rendered.len(),
        }
    }
}

impl LayoutProvider for DomLayout {
    fn measure(&self) -> LayoutBounds {
        let item_width = self
            .real_items
            .first()
            .map(|el| el.get_bounding_client_rect().width())
            .unwrap_or(0.0);
        let total_width = self
            .real_items
            .iter()
            .map(|el| el.get_bounding_client_rect().width())
            .sum();
        LayoutBounds::new(item_width, total_width, self.rendered_count)
    }

    fn viewport_width(&self) -> f64 {
        viewport_width()
    }
}
