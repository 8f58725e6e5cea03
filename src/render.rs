use carousel_core::RenderSink;
use smallvec::SmallVec;
use web_sys as web;

pub type ItemList = SmallVec<[web::HtmlElement; 16]>;

/// CSS transform for a strip scrolled `offset_px` to the right.
#[inline]
pub fn translate_x(offset_px: f64) -> String {
    format!("translateX({}px)", -offset_px)
}

/// Render sink that translates every rendered item, clones included.
pub struct DomSink {
    items: ItemList,
}

impl DomSink {
    pub fn new(items: ItemList) -> Self {
        Self { items }
    }

    /// Drop the inline transform from every item.
    pub fn reset(&self) {
        for el in &self.items {
            _ = el.style().remove_property("transform");
        }
    }
}

impl RenderSink for DomSink {
    fn apply_offset(&mut self, offset_px: f64) {
        let transform = translate_x(offset_px);
        for el in &self.items {
            _ = el.style().set_property("transform", &transform);
        }
    }
}
