//! The particle field: seeded spawn, whole-field rotation, and the
//! per-frame vertical shimmer.

use glam::{EulerRot, Mat4};
use rand::prelude::*;

use crate::constants::*;

/// Creation parameters for a particle field.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub half_extent: f32,
    pub seed: u64,
}

impl FieldParams {
    /// Budget the field for a viewport: narrow viewports get a smaller cloud.
    pub fn for_viewport(viewport_width: f32, seed: u64) -> Self {
        Self {
            particle_count: crate::boot::particle_count_for_width(viewport_width),
            half_extent: FIELD_HALF_EXTENT,
            seed,
        }
    }
}

/// A fixed-size cloud of tinted points. Positions and colors live in flat
/// interleaved buffers (xyz / rgb, three floats per particle) sized once at
/// creation and uploaded to the GPU as-is.
pub struct ParticleField {
    count: usize,
    positions: Vec<f32>,
    colors: Vec<f32>,
    pitch: f32,
    yaw: f32,
    dirty: bool,
}

impl ParticleField {
    pub fn new(params: &FieldParams) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let n = params.particle_count;
        let mut positions = Vec::with_capacity(n * 3);
        let mut colors = Vec::with_capacity(n * 3);
        for _ in 0..n {
            for _ in 0..3 {
                positions.push((rng.gen::<f32>() - 0.5) * 2.0 * params.half_extent);
            }
            for c in 0..3 {
                colors.push(COLOR_BAND_BASE[c] + rng.gen::<f32>() * COLOR_BAND_SPAN[c]);
            }
        }
        Self {
            count: n,
            positions,
            colors,
            pitch: 0.0,
            yaw: 0.0,
            dirty: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Current (pitch, yaw) in radians.
    #[inline]
    pub fn rotation(&self) -> (f32, f32) {
        (self.pitch, self.yaw)
    }

    /// Whole-field rotation as a model matrix, pitch about X then yaw about Y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    /// Advance the field to `elapsed` seconds since the loop started.
    ///
    /// Rotation is absolute in elapsed time, so a dropped or skipped frame
    /// never slows the spin. The shimmer is a per-call increment on the y of
    /// every `SHIMMER_STRIDE`-th particle and accumulates across frames.
    pub fn step(&mut self, elapsed: f32) {
        self.yaw = elapsed * SPIN_RATE_YAW;
        self.pitch = elapsed * SPIN_RATE_PITCH;
        for i in (0..self.count).step_by(SHIMMER_STRIDE) {
            self.positions[i * 3 + 1] +=
                (elapsed + i as f32 * SHIMMER_PHASE).sin() * SHIMMER_AMPLITUDE;
        }
        self.dirty = true;
    }

    /// True when positions changed since the last upload; reading clears it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
