// Pure helpers turning browser measurements into scene inputs. Kept free of
// web-sys types so host tests can include this file directly.

use tunnel_core::PointerState;

/// Drawing-surface size for a window inner size in CSS pixels. The pixel
/// ratio is fixed at 1; fractional sizes are truncated.
#[inline]
pub fn viewport_from_inner(inner_width: f64, inner_height: f64) -> (u32, u32) {
    let w = if inner_width.is_finite() { inner_width.max(0.0) } else { 0.0 };
    let h = if inner_height.is_finite() { inner_height.max(0.0) } else { 0.0 };
    (w as u32, h as u32)
}

/// Pointer state for a `mousemove` at client coordinates against the
/// window's inner size.
#[inline]
pub fn pointer_from_client(
    client_x: f64,
    client_y: f64,
    inner_width: f64,
    inner_height: f64,
) -> PointerState {
    PointerState::from_screen(
        client_x as f32,
        client_y as f32,
        inner_width as f32,
        inner_height as f32,
    )
}
