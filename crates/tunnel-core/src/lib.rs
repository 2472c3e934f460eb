pub mod camera;
pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod path;
pub mod pattern;
pub mod render;
pub mod scene;
pub mod tween;
pub mod uniforms;

// Shader bundled as a string constant
pub static TUNNEL_WGSL: &str = include_str!("../shaders/tunnel.wgsl");

pub use camera::*;
pub use error::InitError;
pub use geometry::{TubeMesh, TubeVertex};
pub use input::PointerState;
pub use path::{wrap_progress, TunnelPath};
pub use render::{Gpu, TunnelRenderer};
pub use scene::*;
pub use tween::*;
pub use uniforms::*;
