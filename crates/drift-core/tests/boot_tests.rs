// Host-side tests for the startup gate and viewport-derived budgets.

use drift_core::{
    clamped_pixel_ratio, particle_count_for_width, FieldParams, InitOutcome, MAX_PIXEL_RATIO,
    PARTICLE_COUNT_LARGE, PARTICLE_COUNT_SMALL,
};

#[test]
fn particle_budget_follows_the_width_cutoff() {
    assert_eq!(particle_count_for_width(0.0), PARTICLE_COUNT_SMALL);
    assert_eq!(particle_count_for_width(320.0), PARTICLE_COUNT_SMALL);
    assert_eq!(particle_count_for_width(767.9), PARTICLE_COUNT_SMALL);
    // The cutoff itself counts as large.
    assert_eq!(particle_count_for_width(768.0), PARTICLE_COUNT_LARGE);
    assert_eq!(particle_count_for_width(1920.0), PARTICLE_COUNT_LARGE);
}

#[test]
fn field_params_pick_up_the_viewport_budget() {
    assert_eq!(
        FieldParams::for_viewport(375.0, 1).particle_count,
        PARTICLE_COUNT_SMALL
    );
    assert_eq!(
        FieldParams::for_viewport(1440.0, 1).particle_count,
        PARTICLE_COUNT_LARGE
    );
}

#[test]
fn reduced_motion_wins_over_surface_presence() {
    assert_eq!(
        InitOutcome::resolve(true, true),
        InitOutcome::SkippedReducedMotion
    );
    assert_eq!(
        InitOutcome::resolve(true, false),
        InitOutcome::SkippedReducedMotion
    );
}

#[test]
fn missing_surface_skips_quietly() {
    assert_eq!(
        InitOutcome::resolve(false, false),
        InitOutcome::SkippedMissingSurface
    );
}

#[test]
fn the_happy_path_starts() {
    let outcome = InitOutcome::resolve(false, true);
    assert_eq!(outcome, InitOutcome::Started);
    assert!(!outcome.is_skip());
    assert!(InitOutcome::resolve(true, true).is_skip());
    assert!(InitOutcome::resolve(false, false).is_skip());
}

#[test]
fn pixel_ratio_is_capped_not_floored() {
    assert_eq!(clamped_pixel_ratio(1.0), 1.0);
    assert_eq!(clamped_pixel_ratio(2.0), 2.0);
    assert_eq!(clamped_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    assert_eq!(clamped_pixel_ratio(0.75), 0.75);
}
