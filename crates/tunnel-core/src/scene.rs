//! Mutable scene state shared by the frame loop, the tween, and the input
//! handlers. Each field has a single writer:
//!
//! - `pointer`: pointer-move handler
//! - `progress`, camera pose: tween update
//! - `viewport`, camera aspect: resize handler
//! - `uniforms.time`: frame loop
//! - `uniforms.enable_displacement`: [`SceneState::toggle_displacement`]

use crate::camera::{Camera, FlyThrough};
use crate::constants::{CLEAR_COLOR_HEX, MSAA_SAMPLES, TIME_STEP};
use crate::input::PointerState;
use crate::path::wrap_progress;
use crate::uniforms::{TunnelUniforms, UniformsPacked};

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub uniforms: TunnelUniforms,
    /// Added to `uTime` on every rendered frame.
    pub time_step: f32,
    pub clear_color_hex: u32,
    pub msaa_samples: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            uniforms: TunnelUniforms::default(),
            time_step: TIME_STEP,
            clear_color_hex: CLEAR_COLOR_HEX,
            msaa_samples: MSAA_SAMPLES,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug)]
pub struct SceneState {
    pub camera: Camera,
    pub uniforms: TunnelUniforms,
    pub pointer: PointerState,
    pub progress: f32,
    pub viewport: Viewport,
    time_step: f32,
}

impl SceneState {
    pub fn new(config: &SceneConfig, width: u32, height: u32) -> Self {
        let viewport = Viewport {
            width: width.max(1),
            height: height.max(1),
        };
        let mut camera = Camera::new(1.0);
        camera.set_aspect(viewport.width, viewport.height);
        Self {
            camera,
            uniforms: config.uniforms.clone(),
            pointer: PointerState::default(),
            progress: 0.0,
            viewport,
            time_step: config.time_step,
        }
    }

    /// Startup state shared by every front-end: camera at the start of the
    /// path and displacement switched off, although the uniform default is on.
    pub fn launch(config: &SceneConfig, width: u32, height: u32, fly: &FlyThrough) -> Self {
        let mut scene = Self::new(config, width, height);
        scene.apply_progress(0.0, fly);
        scene.toggle_displacement(false);
        scene
    }

    /// Track a viewport resize. Zero-sized viewports (minimized windows) are
    /// ignored and reported as `false`.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.viewport = Viewport { width, height };
        self.camera.set_aspect(width, height);
        true
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    /// Tween update: store the progress and move the camera along the path.
    pub fn apply_progress(&mut self, progress: f32, fly: &FlyThrough) {
        self.progress = wrap_progress(progress);
        fly.apply(self.progress, self.pointer, &mut self.camera);
    }

    /// Per-frame clock step. Tied to frame count, not wall time.
    pub fn advance_frame(&mut self) {
        self.uniforms.time += self.time_step;
    }

    pub fn toggle_displacement(&mut self, enable: bool) {
        self.uniforms.enable_displacement = enable;
        log::info!("Displacement Enabled: {}", enable);
    }

    pub fn packed_uniforms(&self) -> UniformsPacked {
        self.uniforms.pack(self.camera.view_proj())
    }
}
