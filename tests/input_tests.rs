// Host-side tests for pure input and render helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod render {
    include!("../src/render.rs");
}

use input::*;
use instant::Instant;
use std::time::Duration;

#[test]
fn wheel_delta_pixels_pass_through() {
    assert_eq!(wheel_delta_px(12.5, constants::DOM_DELTA_PIXEL), 12.5);
    assert_eq!(wheel_delta_px(-3.0, constants::DOM_DELTA_PIXEL), -3.0);
}

#[test]
fn wheel_delta_lines_and_pages_scale_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, constants::DOM_DELTA_LINE), 120.0);
    assert_eq!(wheel_delta_px(-1.0, constants::DOM_DELTA_PAGE), -800.0);
}

#[test]
fn wheel_delta_unknown_mode_keeps_sign() {
    assert_eq!(wheel_delta_px(-7.0, 9), -7.0);
}

#[test]
fn resize_same_width_is_not_a_change() {
    let t0 = Instant::now();
    let mut d = ResizeDebounce::new(1024.0, Duration::from_millis(150));
    assert!(!d.observe(1024.0, t0));
    assert!(!d.is_pending());
    assert!(!d.take_due(t0 + Duration::from_secs(1)));
}

#[test]
fn resize_fires_once_after_window() {
    let t0 = Instant::now();
    let mut d = ResizeDebounce::new(1024.0, Duration::from_millis(150));
    assert!(d.observe(800.0, t0));
    assert!(d.is_pending());
    assert!(!d.take_due(t0 + Duration::from_millis(100)));
    assert!(d.take_due(t0 + Duration::from_millis(150)));
    assert!(!d.take_due(t0 + Duration::from_millis(400)));
    assert_eq!(d.width(), 800.0);
}

#[test]
fn resize_burst_restarts_the_window() {
    let t0 = Instant::now();
    let mut d = ResizeDebounce::new(1024.0, Duration::from_millis(150));
    d.observe(900.0, t0);
    d.observe(850.0, t0 + Duration::from_millis(100));
    assert!(!d.take_due(t0 + Duration::from_millis(200)));
    assert!(d.take_due(t0 + Duration::from_millis(250)));
    assert_eq!(d.width(), 850.0);
}

#[test]
fn translate_moves_strip_left_for_positive_offset() {
    assert_eq!(render::translate_x(120.5), "translateX(-120.5px)");
    assert_eq!(render::translate_x(-300.0), "translateX(300px)");
}
