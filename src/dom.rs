use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// ---------------- Plain JS object access ----------------
/// Property of an arbitrary JS object; `undefined` and `null` read as `None`.
#[inline]
pub fn js_prop(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

#[inline]
pub fn js_f32(target: &JsValue, key: &str) -> Option<f32> {
    js_prop(target, key)
        .and_then(|v| v.as_f64())
        .map(|v| v as f32)
}

/// three.js `Matrix4` stored under `key`, read from its column-major `elements`.
pub fn js_mat4(target: &JsValue, key: &str) -> Option<glam::Mat4> {
    let elements = js_prop(target, key).and_then(|m| js_prop(&m, "elements"))?;
    let mut cols = [0.0f32; 16];
    for (i, slot) in cols.iter_mut().enumerate() {
        *slot = Reflect::get_u32(&elements, i as u32).ok()?.as_f64()? as f32;
    }
    Some(glam::Mat4::from_cols_array(&cols))
}

// ---------------- DOM helpers ----------------

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{} for click listener", element_id);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    set_style(el, "opacity", if visible { "1" } else { "0" });
}

/// Viewport size in CSS pixels, used to normalize touch coordinates.
#[inline]
pub fn viewport_size() -> glam::Vec2 {
    let Some(w) = web::window() else {
        return glam::Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    glam::Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn vec3_attribute(v: glam::Vec3) -> String {
    format!("{} {} {}", v.x, v.y, v.z)
}
