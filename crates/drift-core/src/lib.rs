pub mod boot;
pub mod camera;
pub mod constants;
pub mod field;
pub mod input;
pub mod schedule;
pub mod sprite;

// Shader source bundled as a string constant, shared by every renderer.
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use boot::*;
pub use camera::*;
pub use constants::*;
pub use field::*;
pub use input::*;
pub use schedule::*;
pub use sprite::*;
