// Scene tuning constants shared by the web and native front-ends.

// Grid shader defaults
pub const GRID_DENSITY: f32 = 26.0;
pub const GRID_SMOOTHNESS: f32 = 1.0;
pub const NOISE_SCALE: f32 = 10.0; // frequency of the value noise
pub const NOISE_SPEED: f32 = 0.5; // noise scroll per unit of shader time
pub const NOISE_STRENGTH: f32 = 0.15;
pub const DISPLACEMENT_DEFAULT: bool = true;

// Colors are sRGB hex, converted to linear for uniforms
pub const WIRE_COLOR_HEX: u32 = 0xFF_FF_FF;
pub const BASE_COLOR_HEX: u32 = 0x14_14_14;
pub const CLEAR_COLOR_HEX: u32 = 0x14_14_14;

// Tunnel centerline
pub const TUNNEL_CONTROL_POINTS: [[f32; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, -10.0],
    [3.0, 2.0, -20.0],
    [-3.0, -2.0, -30.0],
    [0.0, 0.0, -40.0],
    [2.0, 1.0, -50.0],
    [-2.0, -1.0, -60.0],
    [0.0, 0.0, -70.0],
];
pub const ARC_LENGTH_DIVISIONS: usize = 200;

// Tube mesh
pub const TUBULAR_SEGMENTS: usize = 300;
pub const RADIAL_SEGMENTS: usize = 32;
pub const TUBE_RADIUS: f32 = 2.0;

// Camera
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

// Fly-through
pub const FLY_DURATION_SECS: f32 = 10.0; // one full pass along the tunnel
pub const LOOKAHEAD: f32 = 0.01; // progress offset of the look-at target
pub const SHAKE_SCALE: f32 = 0.3; // pointer -> camera X/Y offset

// Frame loop
pub const TIME_STEP: f32 = 0.01; // added to uTime once per rendered frame

// Rendering
pub const MSAA_SAMPLES: u32 = 4;
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
