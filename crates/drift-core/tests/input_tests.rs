// Host-side tests for pointer normalization and viewport math.

use drift_core::{PointerState, Viewport};

#[test]
fn pointer_normalization_maps_corners_and_center() {
    let vp = Viewport::new(1000.0, 500.0);

    let center = PointerState::from_client(500.0, 250.0, vp);
    assert!(center.x.abs() < 1e-6);
    assert!(center.y.abs() < 1e-6);

    let top_left = PointerState::from_client(0.0, 0.0, vp);
    assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));

    let bottom_right = PointerState::from_client(1000.0, 500.0, vp);
    assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
}

#[test]
fn pointer_y_points_up() {
    let vp = Viewport::new(800.0, 600.0);
    let near_top = PointerState::from_client(400.0, 30.0, vp);
    let near_bottom = PointerState::from_client(400.0, 570.0, vp);
    assert!(near_top.y > 0.0);
    assert!(near_bottom.y < 0.0);
}

#[test]
fn pointer_default_is_the_center() {
    let state = PointerState::default();
    assert_eq!((state.x, state.y), (0.0, 0.0));
}

#[test]
fn later_samples_replace_earlier_ones() {
    let vp = Viewport::new(100.0, 100.0);
    let mut state = PointerState::from_client(10.0, 10.0, vp);
    state = PointerState::from_client(90.0, 90.0, vp);
    assert_eq!(state, PointerState::from_client(90.0, 90.0, vp));
}

#[test]
fn degenerate_viewports_do_not_blow_up() {
    let zero = Viewport::new(0.0, 0.0);
    let state = PointerState::from_client(0.0, 0.0, zero);
    assert!(state.x.is_finite());
    assert!(state.y.is_finite());
    assert!(zero.aspect().is_finite());
}

#[test]
fn aspect_ratio_is_width_over_height() {
    assert_eq!(Viewport::new(1920.0, 1080.0).aspect(), 1920.0 / 1080.0);
    assert_eq!(Viewport::new(800.0, 0.0).aspect(), 800.0);
}
