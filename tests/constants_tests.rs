// Host-side tests for constants and their relationships with the core crate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tunnel_core::constants as tuning;

#[test]
fn canvas_fills_the_viewport() {
    assert!(CANVAS_STYLE.contains("100vw"));
    assert!(CANVAS_STYLE.contains("100vh"));
    assert!(CANVAS_STYLE.contains("display:block"));
    assert!(!CANVAS_ID.is_empty());
}

#[test]
fn logs_the_displacement_toggle() {
    // the toggle logs at info level and must stay visible
    assert!(LOG_LEVEL >= log::Level::Info);
}

#[test]
fn event_names_are_dom_names() {
    assert_eq!(EVENT_MOUSEMOVE, "mousemove");
    assert_eq!(EVENT_RESIZE, "resize");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_tuning_is_sane() {
    assert!(tuning::TIME_STEP > 0.0);
    assert!(tuning::LOOKAHEAD > 0.0 && tuning::LOOKAHEAD < 1.0);
    assert!(tuning::Z_NEAR < tuning::Z_FAR);
    assert!(tuning::TUBE_RADIUS > tuning::Z_NEAR);
    assert_eq!(tuning::TUNNEL_CONTROL_POINTS.len(), 8);
}

#[test]
fn web_crate_declares_only_deps_it_uses() {
    let manifest = include_str!("../Cargo.toml");
    let deps = manifest
        .split("\n[dependencies]\n")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .unwrap_or_default();
    assert!(deps.contains("tunnel-core"));
    // math lives in tunnel-core
    assert!(!deps.lines().any(|l| l.starts_with("glam")));
    assert!(!deps.lines().any(|l| l.starts_with("bytemuck")));
}
