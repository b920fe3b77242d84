// Host-side tests for particle field spawn and stepping.

use drift_core::{
    FieldParams, ParticleField, COLOR_BAND_BASE, COLOR_BAND_SPAN, FIELD_HALF_EXTENT,
    SHIMMER_AMPLITUDE, SHIMMER_PHASE, SHIMMER_STRIDE, SPIN_RATE_PITCH, SPIN_RATE_YAW,
};

fn field_of(count: usize, seed: u64) -> ParticleField {
    ParticleField::new(&FieldParams {
        particle_count: count,
        half_extent: FIELD_HALF_EXTENT,
        seed,
    })
}

#[test]
fn buffers_hold_three_floats_per_particle() {
    let field = field_of(97, 7);
    assert_eq!(field.len(), 97);
    assert_eq!(field.positions().len(), 97 * 3);
    assert_eq!(field.colors().len(), 97 * 3);
    assert!(!field.is_empty());
}

#[test]
fn buffer_lengths_survive_many_steps() {
    let mut field = field_of(120, 3);
    for k in 0..100 {
        field.step(k as f32 * 0.016);
    }
    assert_eq!(field.positions().len(), 120 * 3);
    assert_eq!(field.colors().len(), 120 * 3);
    assert_eq!(field.len(), 120);
}

#[test]
fn same_seed_and_count_reproduce_identical_buffers() {
    let a = field_of(256, 42);
    let b = field_of(256, 42);
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
}

#[test]
fn different_seeds_scatter_differently() {
    let a = field_of(64, 1);
    let b = field_of(64, 2);
    assert_ne!(a.positions(), b.positions());
}

#[test]
fn spawn_positions_stay_inside_the_cube() {
    let field = field_of(500, 11);
    for &c in field.positions() {
        assert!(c >= -FIELD_HALF_EXTENT, "coordinate {c} below the cube");
        assert!(c <= FIELD_HALF_EXTENT, "coordinate {c} above the cube");
    }
}

#[test]
fn colors_stay_inside_the_band() {
    let field = field_of(500, 13);
    for rgb in field.colors().chunks(3) {
        for c in 0..3 {
            assert!(rgb[c] >= COLOR_BAND_BASE[c]);
            assert!(rgb[c] <= COLOR_BAND_BASE[c] + COLOR_BAND_SPAN[c]);
        }
    }
}

#[test]
fn rotation_is_absolute_in_elapsed_time() {
    // Re-stepping to a later elapsed value lands on the same angles a
    // single step would have: no drift from skipped frames.
    let mut field = field_of(30, 5);
    field.step(1.0);
    field.step(4.0);
    let (pitch, yaw) = field.rotation();
    assert!((yaw - 4.0 * SPIN_RATE_YAW).abs() < 1e-6);
    assert!((pitch - 4.0 * SPIN_RATE_PITCH).abs() < 1e-6);
}

#[test]
fn model_matrix_is_identity_before_the_first_step() {
    let field = field_of(10, 1);
    assert_eq!(field.model_matrix(), glam::Mat4::IDENTITY);
}

#[test]
fn shimmer_moves_only_the_strided_subset() {
    let mut field = field_of(90, 21);
    let before = field.positions().to_vec();
    field.step(0.5);
    let after = field.positions();

    for i in 0..90 {
        // x and z never move.
        assert_eq!(before[i * 3], after[i * 3]);
        assert_eq!(before[i * 3 + 2], after[i * 3 + 2]);

        let dy = after[i * 3 + 1] - before[i * 3 + 1];
        if i % SHIMMER_STRIDE == 0 {
            let expected = (0.5 + i as f32 * SHIMMER_PHASE).sin() * SHIMMER_AMPLITUDE;
            assert!(
                (dy - expected).abs() < 2e-6,
                "particle {i}: dy {dy} vs expected {expected}"
            );
        } else {
            assert_eq!(dy, 0.0, "particle {i} moved but is off-stride");
        }
    }
}

#[test]
fn shimmer_accumulates_across_steps() {
    let mut field = field_of(3, 9);
    let y0 = field.positions()[1];
    field.step(0.25);
    field.step(0.25);
    let expected = y0 + 2.0 * (0.25f32).sin() * SHIMMER_AMPLITUDE;
    assert!((field.positions()[1] - expected).abs() < 4e-6);
}

#[test]
fn dirty_flag_set_by_step_and_consumed_once() {
    let mut field = field_of(10, 1);
    assert!(!field.take_dirty(), "a fresh field has nothing to upload");
    field.step(0.1);
    assert!(field.take_dirty());
    assert!(!field.take_dirty(), "dirty must clear after one read");
}
