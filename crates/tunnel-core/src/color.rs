use glam::Vec3;

/// Split a `0xRRGGBB` value into sRGB channels in \[0, 1\].
#[inline]
pub fn hex_to_srgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}

/// Hex color as the linear value stored in shader uniforms.
#[inline]
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let s = hex_to_srgb(hex);
    Vec3::new(srgb_to_linear(s.x), srgb_to_linear(s.y), srgb_to_linear(s.z))
}

/// Clear color for a non-sRGB target: the sRGB channels are written as-is.
pub fn hex_to_clear(hex: u32) -> wgpu::Color {
    let s = hex_to_srgb(hex);
    wgpu::Color {
        r: s.x as f64,
        g: s.y as f64,
        b: s.z as f64,
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_are_fixed_points() {
        assert!((hex_to_linear(0xFFFFFF) - Vec3::ONE).abs().max_element() < 1e-5);
        assert_eq!(hex_to_linear(0x000000), Vec3::ZERO);
    }

    #[test]
    fn dark_grey_linearizes_below_its_srgb_value() {
        let srgb = hex_to_srgb(0x141414).x;
        let lin = hex_to_linear(0x141414).x;
        assert!((srgb - 20.0 / 255.0).abs() < 1e-6);
        assert!(lin < srgb);
        assert!((lin - 0.006995).abs() < 1e-4);
    }

    #[test]
    fn channels_are_unpacked_in_order() {
        let c = hex_to_srgb(0xFF8000);
        assert_eq!(c.x, 1.0);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }
}
