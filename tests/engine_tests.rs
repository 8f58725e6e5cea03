// Host-side integration tests for the scroll engine through its public API.

use carousel_core::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Sink that keeps every offset it was handed.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<f64>>>);

impl RenderSink for Recorder {
    fn apply_offset(&mut self, offset_px: f64) {
        self.0.borrow_mut().push(offset_px);
    }
}

/// Layout whose geometry can be changed between frames, like a live page.
#[derive(Clone)]
struct Page(Rc<RefCell<StaticLayout>>);

impl Page {
    fn new(item: f64, total: f64, count: usize, viewport: f64) -> Self {
        Page(Rc::new(RefCell::new(StaticLayout::new(
            LayoutBounds::new(item, total, count),
            viewport,
        ))))
    }
}

impl LayoutProvider for Page {
    fn measure(&self) -> LayoutBounds {
        self.0.borrow().bounds
    }

    fn viewport_width(&self) -> f64 {
        self.0.borrow().viewport_width
    }
}

fn make_engine(page: &Page, config: ScrollConfig) -> (ScrollEngine<Recorder, ManualScheduler>, Recorder) {
    let sink = Recorder::default();
    let engine = ScrollEngine::new(page, sink.clone(), ManualScheduler::new(), config).unwrap();
    (engine, sink)
}

#[test]
fn five_item_strip_loops_forever_within_bounds() {
    // 5 items of 300px, padded with two clones
    let page = Page::new(300.0, 1500.0, 5 + LOOP_PADDING_CLONES, 1280.0);
    let (mut engine, sink) = make_engine(&page, ScrollConfig::default());
    assert_eq!(engine.state().velocity, 1.0);
    engine.start();

    let mut wraps = 0;
    let mut prev_out_of_bounds = false;
    for i in 0..2000 {
        let frame = engine.tick();
        if let Some(w) = frame.wrap {
            assert!(w.from >= 1500.0);
            assert_eq!(w.to, -300.0);
            wraps += 1;
        }
        let c = engine.state().current;
        assert!(c >= -300.0, "frame {i}: current {c} below -item_width");
        assert!(c < 1500.0 + 300.0, "frame {i}: current {c} overshot the seam");
        // an eased value past the end is always pulled back on the next frame
        let out = c >= 1500.0;
        assert!(!(out && prev_out_of_bounds), "frame {i}: stuck past the end");
        prev_out_of_bounds = out;
    }
    assert!(wraps >= 1, "expected the strip to wrap at least once");
    assert_eq!(engine.state().target, 2000.0);
    assert_eq!(sink.0.borrow().len(), 2000);
    assert_eq!(engine.scheduler().requested, 2001);
}

#[test]
fn reverse_scroll_wraps_to_the_end() {
    let page = Page::new(300.0, 1500.0, 7, 1280.0);
    let (mut engine, _) = make_engine(&page, ScrollConfig::default());
    engine.on_wheel(-120.0, true);
    let mut saw_wrap = false;
    for _ in 0..400 {
        if let Some(w) = engine.tick().wrap {
            assert!(w.from <= -300.0);
            assert_eq!(w.to, 900.0);
            saw_wrap = true;
            break;
        }
    }
    assert!(saw_wrap);
}

#[test]
fn drag_gesture_follows_pointer_then_hands_back_to_wheel_velocity() {
    let page = Page::new(300.0, 1500.0, 7, 1280.0);
    let (mut engine, _) = make_engine(
        &page,
        ScrollConfig {
            autoplay: false,
            ..Default::default()
        },
    );
    engine.on_wheel(50.0, true);
    for _ in 0..10 {
        engine.tick();
    }
    let snapshot = engine.state().current;

    engine.on_drag_start(400.0, true);
    assert_eq!(engine.mode(), ScrollMode::Dragging);
    engine.on_drag_move(350.0, true);
    assert_eq!(engine.state().target, snapshot + 100.0);
    // leaving the region freezes the target but keeps the gesture
    engine.on_drag_move(0.0, false);
    assert_eq!(engine.state().target, snapshot + 100.0);

    for _ in 0..200 {
        engine.tick();
    }
    assert!((engine.state().current - (snapshot + 100.0)).abs() < 1e-3);

    engine.on_drag_end();
    assert_eq!(engine.mode(), ScrollMode::Free);
    assert_eq!(engine.state().velocity, 1.0);
    let before = engine.state().target;
    engine.tick();
    assert_eq!(engine.state().target, before + 1.0);
}

#[test]
fn resize_to_mobile_applies_on_next_wheel() {
    let page = Page::new(300.0, 1500.0, 7, 1280.0);
    let (mut engine, _) = make_engine(&page, ScrollConfig::default());
    for _ in 0..50 {
        engine.tick();
    }
    let before = *engine.state();

    page.0.borrow_mut().bounds = LayoutBounds::new(120.0, 600.0, 7);
    page.0.borrow_mut().viewport_width = 400.0;
    engine.on_resize(&page).unwrap();
    assert_eq!(*engine.state(), before);
    assert_eq!(engine.bounds().total_width, 600.0);
    assert_eq!(engine.velocity_magnitude(), VELOCITY_MOBILE);

    engine.on_wheel(-10.0, true);
    assert_eq!(engine.state().velocity, -VELOCITY_MOBILE);
}

#[test]
fn malformed_resize_cannot_poison_the_offset() {
    let page = Page::new(300.0, 1500.0, 7, 1280.0);
    let (mut engine, sink) = make_engine(&page, ScrollConfig::default());
    page.0.borrow_mut().bounds = LayoutBounds::new(f64::NAN, f64::INFINITY, 7);
    assert!(engine.on_resize(&page).is_err());
    engine.on_wheel(f64::NAN, true);
    engine.on_drag_start(f64::NAN, true);
    assert_eq!(engine.mode(), ScrollMode::Free);
    for _ in 0..10 {
        engine.tick();
    }
    assert!(sink.0.borrow().iter().all(|x| x.is_finite()));
}

#[test]
fn stop_cancels_the_pending_frame() {
    let page = Page::new(300.0, 1500.0, 7, 1280.0);
    let (mut engine, _) = make_engine(&page, ScrollConfig::default());
    engine.start();
    engine.tick();
    let pending = engine.scheduler().pending();
    assert!(pending.is_some());
    engine.stop();
    assert_eq!(engine.scheduler().pending(), None);
    assert_eq!(engine.scheduler().cancelled, 1);
}
