//! CPU mirror of the fragment stage in `shaders/tunnel.wgsl`.
//!
//! Same math, same hash constants, GLSL `fract` semantics. The screen-space
//! derivative is not available off-GPU, so callers pass the `fwidth` of
//! `uv * density` explicitly.

use crate::uniforms::TunnelUniforms;
use glam::{Vec2, Vec3};

pub const HASH_DOT: Vec2 = Vec2::new(12.9898, 78.233);
#[allow(clippy::excessive_precision)]
pub const HASH_SCALE: f32 = 43758.5453123;

/// `x - floor(x)`; differs from `f32::fract` for negative inputs.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Pseudo-random value in \[0, 1) from a sine hash of `st`.
#[inline]
pub fn random(st: Vec2) -> f32 {
    fract((st.dot(HASH_DOT)).sin() * HASH_SCALE)
}

/// Value noise: four hashed lattice corners blended with `f²(3 − 2f)`.
pub fn value_noise(st: Vec2) -> f32 {
    let i = st.floor();
    let f = Vec2::new(fract(st.x), fract(st.y));

    let a = random(i);
    let b = random(i + Vec2::new(1.0, 0.0));
    let c = random(i + Vec2::new(0.0, 1.0));
    let d = random(i + Vec2::new(1.0, 1.0));

    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    mix(a, b, u.x) + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}

/// Screen-space derivative width of `uv * density` from per-pixel UV steps,
/// `|d/dx| + |d/dy|` as `fwidth` computes it.
#[inline]
pub fn grid_width(uv_dx: Vec2, uv_dy: Vec2, density: f32) -> Vec2 {
    (uv_dx * density).abs() + (uv_dy * density).abs()
}

/// Grid line intensity in \[0, 1\]; 1 on a cell boundary, 0 in the cell body.
///
/// `width * smoothness` must be positive on both axes. At zero the smoothstep
/// edges coincide and a boundary texel evaluates `0 / 0`.
pub fn line_intensity(uv: Vec2, density: f32, smoothness: f32, width: Vec2) -> f32 {
    let scaled = uv * density;
    let grid = Vec2::new(
        (fract(scaled.x - 0.5) - 0.5).abs(),
        (fract(scaled.y - 0.5) - 0.5).abs(),
    );
    let line_x = smoothstep(0.0, width.x * smoothness, grid.x);
    let line_y = smoothstep(0.0, width.y * smoothness, grid.y);
    1.0 - line_x.min(line_y)
}

/// Scrolling noise term added to every channel; exactly 0 when disabled.
pub fn displacement(uv: Vec2, uniforms: &TunnelUniforms) -> f32 {
    if !uniforms.enable_displacement {
        return 0.0;
    }
    let st = uv * uniforms.noise_scale + Vec2::splat(uniforms.time * uniforms.noise_speed);
    value_noise(st) * uniforms.noise_strength
}

/// Final fragment color. Unclamped: strong noise pushes channels past 1.
pub fn shade(uv: Vec2, width: Vec2, uniforms: &TunnelUniforms) -> Vec3 {
    let line = line_intensity(uv, uniforms.grid_density, uniforms.smoothness, width);
    let noise = displacement(uv, uniforms);
    uniforms.base_color.lerp(uniforms.wire_color, line) + Vec3::splat(noise)
}
