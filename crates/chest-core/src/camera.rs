//! Scene camera description and ground-plane picking.
//!
//! The web frontend only forwards screen coordinates for touches; these
//! helpers turn them into a world-space ray and intersect it with the ground
//! plane the chest may be placed on.

use crate::constants::{CAMERA_FOVY_DEG, CAMERA_HEIGHT, GROUND_HALF_EXTENT, GROUND_Y};
use glam::{Mat4, Vec2, Vec3};

const ZNEAR: f32 = 0.1;
const ZFAR: f32 = 100.0;

/// Camera pose and projection as the renderer holds them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCamera {
    /// Camera-to-world transform.
    pub world: Mat4,
    /// Clip-to-view transform.
    pub projection_inverse: Mat4,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::default_rig(1.0)
    }
}

impl SceneCamera {
    /// Right-handed perspective camera at `eye` looking at `target`.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, fovy_radians: f32, aspect: f32) -> Self {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Self {
            world: Mat4::look_at_rh(eye, target, up).inverse(),
            projection_inverse: Mat4::perspective_rh(fovy_radians, aspect, ZNEAR, ZFAR).inverse(),
        }
    }

    /// A-Frame's default rig: eye height 1.6, looking down -Z.
    pub fn default_rig(aspect: f32) -> Self {
        let eye = Vec3::new(0.0, CAMERA_HEIGHT, 0.0);
        Self::look_at(eye, eye - Vec3::Z, Vec3::Y, CAMERA_FOVY_DEG.to_radians(), aspect)
    }

    /// Build from column-major matrices read off a live camera
    /// (`matrixWorld`, `projectionMatrixInverse`). Rejects degenerate input.
    pub fn from_matrices(world: Mat4, projection_inverse: Mat4) -> Option<Self> {
        let usable = |m: &Mat4| m.is_finite() && m.determinant().abs() > f32::EPSILON;
        (usable(&world) && usable(&projection_inverse)).then_some(Self {
            world,
            projection_inverse,
        })
    }

    pub fn eye(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// World-space ray through a normalized viewport point (`[0,1]`, y down).
    ///
    /// Returns `(ray_origin, ray_direction)`.
    pub fn screen_ray(&self, uv: Vec2) -> (Vec3, Vec3) {
        let ndc = Vec3::new(2.0 * uv.x - 1.0, 1.0 - 2.0 * uv.y, 1.0);
        let far = self
            .world
            .transform_point3(self.projection_inverse.project_point3(ndc));
        let eye = self.eye();
        (eye, (far - eye).normalize())
    }

    /// Point where the ray through `uv` meets the ground plane, if it does.
    pub fn pick_ground(&self, uv: Vec2) -> Option<Vec3> {
        let (ro, rd) = self.screen_ray(uv);
        ray_ground(ro, rd, GROUND_Y, GROUND_HALF_EXTENT)
    }
}

/// Intersect a ray with the square ground plane `y = ground_y`,
/// `|x|, |z| <= half_extent`.
#[inline]
pub fn ray_ground(
    ray_origin: Vec3,
    ray_dir: Vec3,
    ground_y: f32,
    half_extent: f32,
) -> Option<Vec3> {
    if ray_dir.y.abs() < 1e-6 || !ray_dir.is_finite() {
        return None;
    }
    let t = (ground_y - ray_origin.y) / ray_dir.y;
    if t < 0.0 {
        return None;
    }
    let hit = ray_origin + ray_dir * t;
    (hit.x.abs() <= half_extent && hit.z.abs() <= half_extent).then_some(hit)
}
