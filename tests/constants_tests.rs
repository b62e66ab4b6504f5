// Host-side tests for tuning constants and their relationships.

use chest_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifecycle_delays_are_ordered() {
    assert!(OPEN_HINT_DELAY_MS < REWARD_REVEAL_DELAY_MS);
    assert!(REWARD_REVEAL_DELAY_MS < REARM_DELAY_MS);
    assert!(CLOSE_RESHOW_DELAY_MS > 0.0);
    assert!(CONFETTI_LAUNCH_DELAY_MS < CONFETTI_FLIGHT_MS);
    assert_eq!(CONFETTI_FLIGHT_MS + CONFETTI_FADE_MS, 2000.0);
    assert_eq!(PARTICLE_LIFETIME_MS, 2000.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn quality_band_is_well_formed() {
    assert!(LOW_QUALITY_FPS < HIGH_QUALITY_FPS);
    assert!(QUALITY_WINDOW_MS >= 1000.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gesture_limits_bracket_unit_scale() {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < 1.0 && 1.0 < MAX_SCALE);
    assert!(DRAG_UNITS_PER_PIXEL > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn offscene_position_is_below_the_ground() {
    assert!(OFFSCENE_POSITION.y < GROUND_Y);
    assert!(CAMERA_HEIGHT > GROUND_Y);
    assert!(GROUND_HALF_EXTENT > 0.0);
}
