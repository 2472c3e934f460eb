use crate::color::hex_to_linear;
use crate::constants::{
    BASE_COLOR_HEX, DISPLACEMENT_DEFAULT, GRID_DENSITY, GRID_SMOOTHNESS, NOISE_SCALE, NOISE_SPEED,
    NOISE_STRENGTH, WIRE_COLOR_HEX,
};
use glam::{Mat4, Vec3};

/// Live values of the grid shader parameters, one field per uniform.
///
/// Nothing here is range-checked: any finite value renders, including
/// negative densities and noise strengths well above 1.
#[derive(Clone, Debug, PartialEq)]
pub struct TunnelUniforms {
    pub smoothness: f32,
    pub grid_density: f32,
    pub noise_scale: f32,
    pub noise_speed: f32,
    pub noise_strength: f32,
    pub enable_displacement: bool,
    pub time: f32,
    /// Linear RGB.
    pub wire_color: Vec3,
    /// Linear RGB.
    pub base_color: Vec3,
}

impl Default for TunnelUniforms {
    fn default() -> Self {
        Self {
            smoothness: GRID_SMOOTHNESS,
            grid_density: GRID_DENSITY,
            noise_scale: NOISE_SCALE,
            noise_speed: NOISE_SPEED,
            noise_strength: NOISE_STRENGTH,
            enable_displacement: DISPLACEMENT_DEFAULT,
            time: 0.0,
            wire_color: hex_to_linear(WIRE_COLOR_HEX),
            base_color: hex_to_linear(BASE_COLOR_HEX),
        }
    }
}

impl TunnelUniforms {
    pub fn pack(&self, view_proj: Mat4) -> UniformsPacked {
        UniformsPacked {
            view_proj: view_proj.to_cols_array_2d(),
            wire_color: self.wire_color.extend(1.0).to_array(),
            base_color: self.base_color.extend(1.0).to_array(),
            smoothness: self.smoothness,
            grid_density: self.grid_density,
            noise_scale: self.noise_scale,
            noise_speed: self.noise_speed,
            noise_strength: self.noise_strength,
            time: self.time,
            enable_displacement: u32::from(self.enable_displacement),
            _pad: 0,
        }
    }
}

/// GPU mirror of `TunnelUniforms` in `shaders/tunnel.wgsl`. WGSL has no
/// host-shareable `bool`, so the flag travels as a `u32`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformsPacked {
    pub view_proj: [[f32; 4]; 4],
    pub wire_color: [f32; 4],
    pub base_color: [f32; 4],
    pub smoothness: f32,
    pub grid_density: f32,
    pub noise_scale: f32,
    pub noise_speed: f32,
    pub noise_strength: f32,
    pub time: f32,
    pub enable_displacement: u32,
    pub _pad: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_block_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<UniformsPacked>(), 128);
        assert_eq!(std::mem::size_of::<UniformsPacked>() % 16, 0);
    }

    #[test]
    fn displacement_flag_packs_as_integer() {
        let mut u = TunnelUniforms::default();
        assert_eq!(u.pack(Mat4::IDENTITY).enable_displacement, 1);
        u.enable_displacement = false;
        assert_eq!(u.pack(Mat4::IDENTITY).enable_displacement, 0);
    }
}
