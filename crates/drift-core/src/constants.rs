// Tuning constants shared by every frontend.

// Viewport-based particle budget, decided once at startup
pub const SMALL_VIEWPORT_WIDTH: f32 = 768.0; // logical px cutoff
pub const PARTICLE_COUNT_SMALL: usize = 800;
pub const PARTICLE_COUNT_LARGE: usize = 1500;

// Backing-store pixel ratio cap; bounds fill cost on dense displays
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Particles spawn uniformly inside a cube of this half-width
pub const FIELD_HALF_EXTENT: f32 = 10.0;

// Per-channel color band: base + random * span (cyan-leaning palette)
pub const COLOR_BAND_BASE: [f32; 3] = [0.0, 0.8, 0.9];
pub const COLOR_BAND_SPAN: [f32; 3] = [0.1, 0.2, 0.1];

// Whole-field rotation rates, radians per elapsed second
pub const SPIN_RATE_YAW: f32 = 0.05;
pub const SPIN_RATE_PITCH: f32 = 0.02;

// Vertical shimmer: every SHIMMER_STRIDE-th particle bobs by
// sin(elapsed + index * SHIMMER_PHASE) * SHIMMER_AMPLITUDE per executed
// frame. The sparse stride and the index-keyed phase are the shipped look.
pub const SHIMMER_STRIDE: usize = 3;
pub const SHIMMER_PHASE: f32 = 0.01;
pub const SHIMMER_AMPLITUDE: f32 = 0.001;

// Camera rig
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Pointer parallax: the eye is pulled toward (pointer.x * PULL_X,
// pointer.y * PULL_Y) by EASE of the remaining distance per executed frame
pub const POINTER_PULL_X: f32 = 0.5;
pub const POINTER_PULL_Y: f32 = 0.3;
pub const CAMERA_EASE: f32 = 0.02;

// The frame loop does work on every Nth scheduled callback
pub const FRAME_DIVISOR: u64 = 2;

// Quiet period before a resize is applied
pub const RESIZE_QUIET_MS: f64 = 250.0;

// Point sprite material
pub const POINT_SIZE: f32 = 0.03; // world units
pub const POINT_OPACITY: f32 = 0.6;
