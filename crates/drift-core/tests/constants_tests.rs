// Sanity checks on tuning constants and the relationships between them.

use drift_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn budgets_are_ordered_and_positive() {
    assert!(PARTICLE_COUNT_SMALL > 0);
    assert!(PARTICLE_COUNT_LARGE > PARTICLE_COUNT_SMALL);
    assert!(SMALL_VIEWPORT_WIDTH > 0.0);
    assert!(FIELD_HALF_EXTENT > 0.0);
    assert!(MAX_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scheduling_constants_are_usable() {
    assert!(FRAME_DIVISOR >= 1);
    assert!(RESIZE_QUIET_MS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_is_a_contraction() {
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
    assert!(POINTER_PULL_X > 0.0 && POINTER_PULL_X <= 1.0);
    assert!(POINTER_PULL_Y > 0.0 && POINTER_PULL_Y <= 1.0);
    // Horizontal parallax is deliberately stronger than vertical.
    assert!(POINTER_PULL_X > POINTER_PULL_Y);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_and_shimmer_stay_subtle() {
    assert!(SPIN_RATE_YAW > SPIN_RATE_PITCH);
    assert!(SPIN_RATE_YAW < 1.0);
    assert!(SHIMMER_STRIDE >= 1);
    assert!(SHIMMER_AMPLITUDE > 0.0 && SHIMMER_AMPLITUDE < 0.01);
    assert!(SHIMMER_PHASE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_sane() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
    assert!(CAMERA_Z > CAMERA_NEAR && CAMERA_Z < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sprite_material_is_translucent() {
    assert!(POINT_SIZE > 0.0);
    assert!(POINT_OPACITY > 0.0 && POINT_OPACITY <= 1.0);
}

#[test]
fn color_band_stays_in_unit_range() {
    for c in 0..3 {
        assert!(COLOR_BAND_BASE[c] >= 0.0);
        assert!(COLOR_BAND_BASE[c] + COLOR_BAND_SPAN[c] <= 1.0);
    }
}
