// Host-side tests for pinch and drag gestures.

use chest_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pair(distance: f32) -> [Vec2; 2] {
    [Vec2::new(0.0, 0.0), Vec2::new(distance, 0.0)]
}

#[test]
fn pinch_scales_incrementally() {
    let mut g = GestureController::new();
    assert!(g.touch_start(&pair(100.0)));
    let up = g.touch_move(&pair(150.0));
    assert!((up.scale.unwrap() - 1.5).abs() < 1e-5);
    // baseline moved to 150, so returning to 100 undoes the zoom
    let down = g.touch_move(&pair(100.0));
    assert!((down.scale.unwrap() - 1.0).abs() < 1e-5);
    assert!(down.translation.is_none());
}

#[test]
fn pinch_is_clamped_both_ways() {
    let mut g = GestureController::new();
    g.touch_start(&pair(100.0));
    assert_eq!(g.touch_move(&pair(1000.0)).scale, Some(MAX_SCALE));
    assert_eq!(g.touch_move(&pair(4000.0)).scale, Some(MAX_SCALE));
    assert_eq!(g.touch_move(&pair(1.0)).scale, Some(MIN_SCALE));
    assert_eq!(g.scale(), MIN_SCALE);
}

#[test]
fn scale_stays_in_range_for_random_pinches() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut g = GestureController::new();
    for _ in 0..50 {
        g.touch_start(&pair(rng.gen_range(1.0..500.0)));
        for _ in 0..20 {
            let update = g.touch_move(&pair(rng.gen_range(0.0..800.0)));
            if let Some(s) = update.scale {
                assert!((MIN_SCALE..=MAX_SCALE).contains(&s), "scale {s}");
            }
        }
        g.touch_end();
    }
}

#[test]
fn zero_baseline_does_not_scale() {
    let mut g = GestureController::new();
    g.touch_start(&pair(0.0));
    assert!(g.touch_move(&pair(50.0)).is_empty());
    assert_eq!(g.scale(), 1.0);
}

#[test]
fn single_touch_drags_with_screen_axes() {
    let mut g = GestureController::new();
    assert!(!g.touch_start(&[Vec2::new(10.0, 10.0)]));
    assert!(g.is_dragging());
    let t = g.touch_move(&[Vec2::new(20.0, 5.0)]).translation.unwrap();
    assert!((t - Vec3::new(0.1, 0.05, 0.0)).length() < 1e-5);
    // incremental: the next delta is measured from (20, 5)
    let t = g.touch_move(&[Vec2::new(20.0, 15.0)]).translation.unwrap();
    assert!((t - Vec3::new(0.0, -0.1, 0.0)).length() < 1e-5);
}

#[test]
fn second_touch_cancels_drag() {
    let mut g = GestureController::new();
    g.touch_start(&[Vec2::new(10.0, 10.0)]);
    g.touch_start(&[Vec2::new(10.0, 10.0), Vec2::new(50.0, 10.0)]);
    assert!(!g.is_dragging());
    assert!(g.touch_move(&[Vec2::new(30.0, 10.0)]).is_empty());
}

#[test]
fn touch_end_clears_tracking() {
    let mut g = GestureController::new();
    g.touch_start(&pair(100.0));
    g.touch_move(&pair(120.0));
    g.touch_end();
    assert!(g.touch_move(&pair(200.0)).is_empty());
    assert!(g.touch_move(&[Vec2::new(1.0, 1.0)]).is_empty());
    // scale survives the end of a gesture
    assert!((g.scale() - 1.2).abs() < 1e-5);
}

#[test]
fn experience_applies_gestures_to_session() {
    let mut exp = Experience::new(StdRng::seed_from_u64(1));
    exp.touch_start(&pair(100.0));
    let cmds = exp.touch_move(&pair(200.0));
    assert_eq!(cmds, vec![Command::ScaleChest(2.0)]);
    assert_eq!(exp.session().scale, 2.0);
    exp.touch_end();

    exp.touch_start(&[Vec2::new(0.0, 0.0)]);
    let cmds = exp.touch_move(&[Vec2::new(100.0, 0.0)]);
    let expected = OFFSCENE_POSITION + Vec3::new(1.0, 0.0, 0.0);
    assert_eq!(cmds.len(), 1);
    assert!((exp.session().position - expected).length() < 1e-5);
}
