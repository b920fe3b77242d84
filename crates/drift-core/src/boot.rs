//! Startup gate decisions, kept host-independent so they can be tested
//! without a browser.

use crate::constants::*;

/// Outcome of the startup gate. The two skip variants are expected no-ops,
/// not errors: nothing is registered, nothing draws, the page stays static.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Started,
    SkippedReducedMotion,
    SkippedMissingSurface,
}

impl InitOutcome {
    /// Gate decision. A reduced-motion preference wins over surface presence,
    /// so it suppresses the background even when the canvas exists.
    pub fn resolve(reduced_motion: bool, surface_present: bool) -> Self {
        if reduced_motion {
            InitOutcome::SkippedReducedMotion
        } else if !surface_present {
            InitOutcome::SkippedMissingSurface
        } else {
            InitOutcome::Started
        }
    }

    pub fn is_skip(&self) -> bool {
        !matches!(self, InitOutcome::Started)
    }
}

/// Particle budget for a viewport width in logical pixels.
pub fn particle_count_for_width(width: f32) -> usize {
    if width < SMALL_VIEWPORT_WIDTH {
        PARTICLE_COUNT_SMALL
    } else {
        PARTICLE_COUNT_LARGE
    }
}

/// Device pixel ratio actually used for the backing store.
pub fn clamped_pixel_ratio(ratio: f64) -> f64 {
    ratio.min(MAX_PIXEL_RATIO)
}
