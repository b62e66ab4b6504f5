use glam::{Vec2, Vec3};
use smallvec::SmallVec;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::GROUND_PLANE_ID;
use crate::dom::{js_f32, js_prop};

pub type Touches = SmallVec<[Vec2; 2]>;

// ---------------- Touch helpers ----------------
#[inline]
pub fn touch_points(ev: &web::TouchEvent) -> Touches {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

// ---------------- Scene click helpers ----------------
/// Read `detail.intersectedEl` / `detail.intersection.point` from a scene
/// click. Returns whether the hit entity is the ground plane and the point.
pub fn click_intersection(ev: &web::Event) -> Option<(bool, Vec3)> {
    let detail = ev.dyn_ref::<web::CustomEvent>()?.detail();
    let point = js_prop(&detail, "intersection").and_then(|i| js_prop(&i, "point"))?;
    let p = Vec3::new(
        js_f32(&point, "x")?,
        js_f32(&point, "y")?,
        js_f32(&point, "z")?,
    );
    let on_ground = js_prop(&detail, "intersectedEl")
        .and_then(|el| el.dyn_into::<web::Element>().ok())
        .map(|el| el.id() == GROUND_PLANE_ID)
        .unwrap_or(false);
    Some((on_ground, p))
}
