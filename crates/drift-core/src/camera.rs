//! Camera state shared by the web and native renderers.

use glam::{Mat4, Vec3};

use crate::constants::*;
use crate::input::PointerState;

/// Right-handed perspective camera.
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
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up axes of the view, for billboarding sprites.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        (view.row(0).truncate(), view.row(1).truncate())
    }
}

/// Camera plus the pointer-parallax easing that drives it.
pub struct CameraRig {
    pub camera: Camera,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, CAMERA_Z),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: CAMERA_FOVY_DEG.to_radians(),
                znear: CAMERA_NEAR,
                zfar: CAMERA_FAR,
            },
        }
    }

    /// Ease the eye toward the pointer-derived target by a fixed fraction of
    /// the remaining distance. Depth never changes and the rig keeps facing
    /// the origin, so pointer motion reads as gentle parallax.
    pub fn ease_toward(&mut self, pointer: PointerState) {
        let tx = pointer.x * POINTER_PULL_X;
        let ty = pointer.y * POINTER_PULL_Y;
        self.camera.eye.x += (tx - self.camera.eye.x) * CAMERA_EASE;
        self.camera.eye.y += (ty - self.camera.eye.y) * CAMERA_EASE;
        self.camera.target = Vec3::ZERO;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.aspect = aspect;
    }
}
