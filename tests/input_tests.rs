// Host-side tests for pointer normalization, ground picking and the
// placement/chest state enums.

use chest_core::*;
use glam::{Mat4, Vec2, Vec3};

#[test]
fn ray_ground_hits_in_front() {
    let hit = ray_ground(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, -1.0, -1.0).normalize(), 0.0, 5.0)
        .unwrap();
    assert!(hit.y.abs() < 1e-5);
    assert!((hit.z + 1.6).abs() < 1e-4);
}

#[test]
fn ray_ground_misses_upward_parallel_and_outside() {
    let eye = Vec3::new(0.0, 1.6, 0.0);
    assert!(ray_ground(eye, Vec3::new(0.0, 1.0, -1.0).normalize(), 0.0, 5.0).is_none());
    assert!(ray_ground(eye, Vec3::new(0.0, 0.0, -1.0), 0.0, 5.0).is_none());
    // lands at z = -16, beyond the 10x10 plane
    assert!(ray_ground(eye, Vec3::new(0.0, -0.1, -1.0).normalize(), 0.0, 5.0).is_none());
}

/// Camera as three.js reports it: column-major `matrixWorld` and an
/// OpenGL-style `projectionMatrixInverse`.
fn three_camera(eye: Vec3, target: Vec3) -> SceneCamera {
    let world = Mat4::look_at_rh(eye, target, Vec3::Y).inverse();
    let projection = Mat4::perspective_rh_gl(80f32.to_radians(), 0.5, 0.005, 1000.0);
    SceneCamera::from_matrices(
        Mat4::from_cols_array(&world.to_cols_array()),
        Mat4::from_cols_array(&projection.inverse().to_cols_array()),
    )
    .unwrap()
}

#[test]
fn centre_bottom_of_view_picks_ground_ahead() {
    let cam = SceneCamera::default_rig(0.5);
    assert!((cam.eye() - Vec3::new(0.0, 1.6, 0.0)).length() < 1e-5);
    let hit = cam.pick_ground(Vec2::new(0.5, 0.9)).unwrap();
    assert!(hit.x.abs() < 1e-3);
    assert!(hit.z < 0.0);
    assert!(cam.pick_ground(Vec2::new(0.5, 0.1)).is_none());
}

#[test]
fn invalid_aspect_falls_back_to_square() {
    assert_eq!(SceneCamera::default_rig(0.0), SceneCamera::default());
    assert_eq!(SceneCamera::default_rig(f32::NAN), SceneCamera::default());
}

#[test]
fn live_camera_rig_picks_where_it_looks() {
    let cam = three_camera(Vec3::new(0.0, 3.0, 2.0), Vec3::ZERO);
    assert!((cam.eye() - Vec3::new(0.0, 3.0, 2.0)).length() < 1e-4);
    let hit = cam.pick_ground(Vec2::new(0.5, 0.5)).unwrap();
    assert!(hit.length() < 1e-2, "hit {:?}", hit);

    // the default rig would have put the chest somewhere else entirely
    let guess = SceneCamera::default_rig(0.5).pick_ground(Vec2::new(0.5, 0.5));
    assert_eq!(guess, None);
}

#[test]
fn degenerate_camera_matrices_are_rejected() {
    let proj_inv = Mat4::perspective_rh_gl(1.0, 1.0, 0.1, 100.0).inverse();
    assert_eq!(SceneCamera::from_matrices(Mat4::ZERO, proj_inv), None);
    assert_eq!(SceneCamera::from_matrices(Mat4::IDENTITY, Mat4::NAN), None);
    assert!(SceneCamera::from_matrices(Mat4::IDENTITY, proj_inv).is_some());
}

#[test]
fn viewport_uv_normalizes_and_clamps() {
    let vp = Vec2::new(200.0, 100.0);
    assert_eq!(viewport_uv(Vec2::new(100.0, 50.0), vp), Some(Vec2::new(0.5, 0.5)));
    assert_eq!(viewport_uv(Vec2::new(-10.0, 500.0), vp), Some(Vec2::new(0.0, 1.0)));
    assert_eq!(viewport_uv(Vec2::new(1.0, 1.0), Vec2::ZERO), None);
}

#[test]
fn click_needs_a_scene_intersection() {
    let p = Pointer::from_click(Some((true, Vec3::X)));
    assert_eq!(
        p,
        Some(Pointer::Intersection {
            on_ground: true,
            point: Vec3::X
        })
    );
    assert_eq!(Pointer::from_click(None), None);
}

#[test]
fn touch_uses_first_touch_only() {
    let vp = Vec2::new(100.0, 100.0);
    let p = Pointer::from_touches(&[Vec2::new(50.0, 50.0), Vec2::new(0.0, 0.0)], vp);
    assert_eq!(p, Some(Pointer::Screen(Vec2::new(0.5, 0.5))));
    assert_eq!(Pointer::from_touches(&[], vp), None);
}

#[test]
fn off_ground_intersection_has_no_hit() {
    let cam = SceneCamera::default();
    let p = Pointer::Intersection {
        on_ground: false,
        point: Vec3::ONE,
    };
    assert_eq!(p.ground_hit(&cam), None);
}

#[test]
fn placement_transitions() {
    let idle = PlacementState::default();
    assert!(!idle.surface_scanned());
    assert_eq!(idle.place(Some(Vec3::ZERO)), Err(TransitionError::NotScanned));
    let scanned = idle.scan().unwrap();
    assert!(scanned.surface_scanned() && !scanned.chest_placed());
    assert_eq!(scanned.place(None), Err(TransitionError::MissedGround));
    let (placed, at) = scanned.place(Some(Vec3::new(1.0, 0.0, 2.0))).unwrap();
    assert!(placed.chest_placed());
    assert_eq!(at, Vec3::new(1.0, 0.0, 2.0));
    assert_eq!(placed.scan(), Err(TransitionError::AlreadyScanned));
    assert_eq!(placed.place(Some(Vec3::ZERO)), Err(TransitionError::AlreadyPlaced));
}

#[test]
fn chest_transitions() {
    let closed = ChestState::default();
    assert_eq!(closed.open(PlacementState::Scanned), Err(TransitionError::NotPlaced));
    let opening = closed.open(PlacementState::Placed).unwrap();
    assert!(opening.is_open());
    assert_eq!(opening.open(PlacementState::Placed), Err(TransitionError::AlreadyOpen));
    assert_eq!(opening.arm_reset(), Err(TransitionError::NotRevealed));
    let open = opening.reveal().unwrap();
    assert_eq!(open.reveal(), Err(TransitionError::NotOpening));
    assert_eq!(open.reset(), Err(TransitionError::NotArmed));
    let armed = open.arm_reset().unwrap();
    assert_eq!(armed.reset(), Ok(ChestState::Closed));
}
