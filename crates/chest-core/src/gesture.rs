//! Touch gestures on the placed chest: two-finger pinch scales it, a single
//! finger drags it. Both work incrementally from the previous move event.

use crate::constants::{DRAG_UNITS_PER_PIXEL, MAX_SCALE, MIN_SCALE};
use glam::{Vec2, Vec3};

/// Changes produced by one touch move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureUpdate {
    /// New absolute scale factor, already clamped.
    pub scale: Option<f32>,
    /// Translation to add to the chest position.
    pub translation: Option<Vec3>,
}

impl GestureUpdate {
    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.translation.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct GestureController {
    scale: f32,
    dragging: bool,
    last_touch: Option<Vec2>,
    // zero when no pinch baseline is held
    pinch_distance: f32,
}

impl Default for GestureController {
    fn default() -> Self {
        Self {
            scale: 1.0,
            dragging: false,
            last_touch: None,
            pinch_distance: 0.0,
        }
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin tracking. Returns true when the host should suppress its default
    /// touch handling (multi-touch would otherwise zoom the page).
    pub fn touch_start(&mut self, touches: &[Vec2]) -> bool {
        match touches {
            [single] => {
                self.dragging = true;
                self.last_touch = Some(*single);
            }
            [a, b] => {
                self.dragging = false;
                self.last_touch = None;
                self.pinch_distance = a.distance(*b);
            }
            [] => {}
            _ => {
                self.dragging = false;
                self.last_touch = None;
            }
        }
        touches.len() > 1
    }

    pub fn touch_move(&mut self, touches: &[Vec2]) -> GestureUpdate {
        let mut update = GestureUpdate::default();
        match touches {
            [a, b] => {
                let current = a.distance(*b);
                if self.pinch_distance > 0.0 && current.is_finite() {
                    self.scale =
                        (self.scale * current / self.pinch_distance).clamp(MIN_SCALE, MAX_SCALE);
                    self.pinch_distance = current;
                    update.scale = Some(self.scale);
                }
            }
            [single] if self.dragging => {
                if let Some(last) = self.last_touch {
                    let delta = *single - last;
                    update.translation = Some(Vec3::new(
                        delta.x * DRAG_UNITS_PER_PIXEL,
                        -delta.y * DRAG_UNITS_PER_PIXEL,
                        0.0,
                    ));
                }
                self.last_touch = Some(*single);
            }
            _ => {}
        }
        update
    }

    /// Any lifted finger ends the gesture; no inertia is carried over.
    pub fn touch_end(&mut self) {
        self.dragging = false;
        self.last_touch = None;
        self.pinch_distance = 0.0;
    }

    /// Forget tracking and return to unit scale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
