//! Perspective camera and its fly-through rig.
//!
//! These types avoid referencing platform-specific APIs and are shared by the
//! web and native front-ends.

use crate::constants::{FOV_Y_DEGREES, LOOKAHEAD, SHAKE_SCALE, Z_FAR, Z_NEAR};
use crate::input::PointerState;
use crate::path::{wrap_progress, TunnelPath};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at the origin looking down -Z, which is where the tunnel starts.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: FOV_Y_DEGREES.to_radians(),
            znear: Z_NEAR,
            zfar: Z_FAR,
        }
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Places the camera on the tunnel path for a given tween progress.
#[derive(Clone, Debug)]
pub struct FlyThrough {
    path: TunnelPath,
    pub lookahead: f32,
    pub shake_scale: f32,
}

impl FlyThrough {
    pub fn new(path: TunnelPath) -> Self {
        Self {
            path,
            lookahead: LOOKAHEAD,
            shake_scale: SHAKE_SCALE,
        }
    }

    pub fn path(&self) -> &TunnelPath {
        &self.path
    }

    /// Eye and look-at target for `progress`. The pointer shake moves the eye
    /// in X/Y only; the target stays on the path.
    pub fn pose(&self, progress: f32, pointer: PointerState) -> (Vec3, Vec3) {
        let p1 = self.path.point_at(progress);
        let p2 = self.path.point_at(wrap_progress(progress + self.lookahead));
        let shake = Vec3::new(
            pointer.x * self.shake_scale,
            pointer.y * self.shake_scale,
            0.0,
        );
        (p1 + shake, p2)
    }

    pub fn apply(&self, progress: f32, pointer: PointerState, camera: &mut Camera) {
        let (eye, target) = self.pose(progress, pointer);
        camera.look_at(eye, target);
    }
}
