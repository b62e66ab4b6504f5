use crate::camera::SceneCamera;
use glam::{Vec2, Vec3};

/// A placement tap after input normalization.
///
/// Clicks and touches both end up here so placement only has one entry point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pointer {
    /// The scene resolved the intersection itself (cursor raycaster click).
    Intersection { on_ground: bool, point: Vec3 },
    /// Normalized viewport position (`[0,1]`, y down) with no scene hit attached.
    Screen(Vec2),
}

impl Pointer {
    /// Normalize a scene click. Only clicks the scene raycaster resolved
    /// carry a hit; plain DOM clicks bubbling from the canvas are ignored.
    pub fn from_click(intersection: Option<(bool, Vec3)>) -> Option<Self> {
        intersection.map(|(on_ground, point)| Pointer::Intersection { on_ground, point })
    }

    /// Normalize a touch start: the first touch acts as the click position.
    pub fn from_touches(touches: &[Vec2], viewport: Vec2) -> Option<Self> {
        touches
            .first()
            .and_then(|t| viewport_uv(*t, viewport))
            .map(Pointer::Screen)
    }

    /// World-space ground point this pointer lands on, if any.
    pub fn ground_hit(&self, camera: &SceneCamera) -> Option<Vec3> {
        match *self {
            Pointer::Intersection { on_ground, point } => on_ground.then_some(point),
            Pointer::Screen(uv) => camera.pick_ground(uv),
        }
    }
}

/// Client pixel coordinates to normalized viewport coordinates.
#[inline]
pub fn viewport_uv(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x > 0.0 && viewport.y > 0.0 && client.is_finite() {
        Some((client / viewport).clamp(Vec2::ZERO, Vec2::ONE))
    } else {
        None
    }
}
