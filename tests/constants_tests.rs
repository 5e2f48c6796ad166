// Host-side tests for the DOM wiring constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use ribbon_core::Params;

#[test]
fn param_key_strips_prefix() {
    assert_eq!(param_key("data-ribbon-trails"), Some("trails"));
    assert_eq!(param_key("data-ribbon-wave-offset"), Some("wave-offset"));
}

#[test]
fn param_key_ignores_other_attributes() {
    assert_eq!(param_key("id"), None);
    assert_eq!(param_key("data-other"), None);
    assert_eq!(param_key("data-ribbon-"), None);
    // the manual marker is not a parameter
    assert_eq!(param_key(MANUAL_ATTR), None);
}

#[test]
fn attribute_overrides_feed_params() {
    let attrs = [
        ("class", "hero"),
        ("data-ribbon-trails", "24"),
        ("data-ribbon-debug", ""),
    ];
    let overrides: Vec<(&str, &str)> = attrs
        .iter()
        .filter_map(|(name, value)| param_key(name).map(|k| (k, *value)))
        .collect();
    let mut params = Params::default();
    params.apply_overrides(overrides).unwrap();
    assert_eq!(params.trails, 24);
    assert!(params.debug);
}

#[test]
fn event_names_match_the_dom() {
    assert_eq!(EV_MOUSE_MOVE, "mousemove");
    assert_eq!(EV_TOUCH_START, "touchstart");
    assert_eq!(EV_TOUCH_MOVE, "touchmove");
    assert_eq!(EV_ORIENTATION_CHANGE, "orientationchange");
    assert!(MANUAL_ATTR.starts_with(PARAM_ATTR_PREFIX));
}
