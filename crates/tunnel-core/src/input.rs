/// Last observed pointer position, normalized to \[-1, 1\] on both axes with
/// +Y pointing up.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a screen position (origin top-left) against the viewport.
    /// A degenerate viewport yields the centre.
    #[inline]
    pub fn from_screen(sx: f32, sy: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (sx / width) * 2.0 - 1.0,
            y: -(sy / height) * 2.0 + 1.0,
        }
    }
}
