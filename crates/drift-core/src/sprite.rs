//! GPU-facing sprite data shared by the web and native renderers: the
//! uniform block layout and the unit quad expanded per instance. Both must
//! stay in lockstep with `particles.wgsl`.

use glam::Mat4;

use crate::camera::Camera;

/// Camera-facing unit quad as two triangles, xy corner pairs.
pub const QUAD_CORNERS: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, // first triangle
    -0.5, -0.5, 0.5, 0.5, -0.5, 0.5, // second triangle
];

/// Uniform block for the particle pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
    pub point_size: f32,
    pub opacity: f32,
    pub _pad: [f32; 2],
}

impl SpriteUniforms {
    pub fn for_frame(camera: &Camera, model: Mat4, point_size: f32, opacity: f32) -> Self {
        let (right, up) = camera.billboard_axes();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            point_size,
            opacity,
            _pad: [0.0; 2],
        }
    }
}
