/// Host-side wiring constants for the web front-end.
///
/// Engine tuning lives in `carousel_core::constants`; these only describe the
/// page the carousel is mounted on and how raw browser events are read.
// Default markup
pub const ROOT_SELECTOR: &str = ".slider";
pub const LIST_SELECTOR: &str = ".slider__list";
pub const ITEM_SELECTOR: &str = ".slider__item";

// Marks the loop-padding clones so teardown can remove them
pub const CLONE_ATTRIBUTE: &str = "data-carousel-clone";

// Resize settles for this long before the engine re-measures
pub const RESIZE_DEBOUNCE_MS: u64 = 150;

// WheelEvent.deltaMode scaling to pixels
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;
pub const WHEEL_LINE_HEIGHT_PX: f64 = 40.0;
pub const WHEEL_PAGE_HEIGHT_PX: f64 = 800.0;
