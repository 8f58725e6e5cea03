// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use carousel_core::constants::*;
use carousel_core::ScrollConfig;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn engine_constants_are_within_reasonable_bounds() {
    // Ease must converge without overshooting
    assert!(DEFAULT_EASE > 0.0 && DEFAULT_EASE <= 1.0);

    assert!(WHEEL_DAMPING > 0.0);
    assert!(DRAG_MULTIPLIER > 0.0);

    // Narrow viewports scroll slower
    assert!(VELOCITY_MOBILE > 0.0);
    assert!(VELOCITY_MOBILE < VELOCITY_DESKTOP);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);

    assert_eq!(LOOP_PADDING_CLONES, 2);
}

#[test]
fn velocity_switches_at_breakpoint() {
    let config = ScrollConfig::default();
    assert_eq!(config.velocity_magnitude(320.0), VELOCITY_MOBILE);
    assert_eq!(config.velocity_magnitude(768.0), VELOCITY_MOBILE);
    assert_eq!(config.velocity_magnitude(769.0), VELOCITY_DESKTOP);
    assert_eq!(config.velocity_magnitude(1920.0), VELOCITY_DESKTOP);
}

#[test]
fn default_config_is_valid() {
    assert!(ScrollConfig::default().validate().is_ok());
}

#[test]
fn config_rejects_negative_speed() {
    let config = ScrollConfig {
        velocity_mobile: -1.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_constants_are_consistent() {
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(WHEEL_PAGE_HEIGHT_PX > WHEEL_LINE_HEIGHT_PX);
    assert!(WHEEL_LINE_HEIGHT_PX > 0.0);
    assert!(ROOT_SELECTOR.starts_with('.'));
    assert!(ITEM_SELECTOR.starts_with(LIST_SELECTOR.trim_end_matches("__list")));
    assert!(CLONE_ATTRIBUTE.starts_with("data-"));
}
