// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use tunnel_core::PointerState;

#[test]
fn viewport_truncates_css_pixels() {
    assert_eq!(viewport_from_inner(1280.0, 720.0), (1280, 720));
    assert_eq!(viewport_from_inner(1280.9, 720.4), (1280, 720));
}

#[test]
fn viewport_rejects_garbage_sizes() {
    assert_eq!(viewport_from_inner(-5.0, 100.0), (0, 100));
    assert_eq!(viewport_from_inner(f64::NAN, f64::INFINITY), (0, 0));
}

#[test]
fn pointer_corners_map_to_unit_square() {
    let (w, h) = (1000.0, 500.0);
    assert_eq!(pointer_from_client(0.0, 0.0, w, h), PointerState::new(-1.0, 1.0));
    assert_eq!(pointer_from_client(w, h, w, h), PointerState::new(1.0, -1.0));
    assert_eq!(pointer_from_client(w / 2.0, h / 2.0, w, h), PointerState::new(0.0, 0.0));
}

#[test]
fn pointer_y_points_up() {
    let top = pointer_from_client(10.0, 100.0, 800.0, 600.0);
    let bottom = pointer_from_client(10.0, 500.0, 800.0, 600.0);
    assert!(top.y > bottom.y);
}

#[test]
fn pointer_in_zero_sized_window_is_centred() {
    assert_eq!(pointer_from_client(30.0, 40.0, 0.0, 0.0), PointerState::default());
}
