//! A-Frame scene bindings: every scene-side command becomes an attribute
//! write on the chest entities.

use chest_core::{EffectId, LidAnimation, ParticleBurst, RendererSettings, SceneCamera};
use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom::{self, vec3_attribute};

pub struct SceneBindings {
    document: web::Document,
    scene: web::Element,
    container: Option<web::Element>,
    chest: Option<web::Element>,
}

impl SceneBindings {
    pub fn new(document: &web::Document, scene: web::Element) -> Self {
        Self {
            document: document.clone(),
            scene,
            container: document.get_element_by_id(CHEST_CONTAINER_ID),
            chest: document.get_element_by_id(CHEST_ID),
        }
    }

    pub fn scene(&self) -> &web::Element {
        &self.scene
    }

    pub fn hide_loader(&self) {
        if let Ok(Some(el)) = self.document.query_selector(LOADER_SELECTOR) {
            if let Some(loader) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(loader, "display", "none");
            }
        }
    }

    /// Whether A-Frame already emitted `loaded` for the scene.
    pub fn has_loaded(&self) -> bool {
        dom::js_prop(self.scene.as_ref(), "hasLoaded")
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    /// The scene's active camera, used to pick the ground plane for touch
    /// placement. Falls back to the default rig until three.js exposes one.
    pub fn camera(&self) -> SceneCamera {
        let live = dom::js_prop(self.scene.as_ref(), "camera").and_then(|cam| {
            SceneCamera::from_matrices(
                dom::js_mat4(&cam, "matrixWorld")?,
                dom::js_mat4(&cam, "projectionMatrixInverse")?,
            )
        });
        live.unwrap_or_else(|| {
            log::debug!("[placement] no live camera, using default rig");
            let viewport = dom::viewport_size();
            SceneCamera::default_rig(viewport.x / viewport.y.max(1.0))
        })
    }

    pub fn move_chest(&self, position: Vec3) {
        if let Some(c) = &self.container {
            _ = c.set_attribute("position", &vec3_attribute(position));
        }
    }

    pub fn scale_chest(&self, scale: f32) {
        if let Some(c) = &self.container {
            _ = c.set_attribute("scale", &vec3_attribute(Vec3::splat(scale)));
        }
    }

    pub fn play_open_animation(&self) {
        if let Some(chest) = &self.chest {
            _ = chest.set_attribute("animation-mixer", "clip: open");
        }
    }

    pub fn clear_chest_animation(&self) {
        if let Some(chest) = &self.chest {
            _ = chest.set_attribute("rotation", "0 0 0");
            _ = chest.remove_attribute("animation-mixer");
        }
    }

    pub fn set_glow(&self, material: Option<&str>) {
        if let Some(chest) = &self.chest {
            match material {
                Some(m) => {
                    _ = chest.set_attribute("material", m);
                }
                None => {
                    _ = chest.remove_attribute("material");
                }
            }
        }
    }

    pub fn attach_lid(&self, lid: &LidAnimation) {
        let Some(container) = &self.container else {
            return;
        };
        if let Ok(el) = self.document.create_element("a-entity") {
            el.set_id(LID_ID);
            _ = el.set_attribute("position", &vec3_attribute(lid.offset));
            _ = el.set_attribute("animation", &lid.to_attribute());
            _ = container.append_child(&el);
        }
    }

    pub fn detach_lid(&self) {
        if let Some(el) = self.document.get_element_by_id(LID_ID) {
            el.remove();
        }
    }

    pub fn attach_particles(&self, burst: &ParticleBurst) {
        let Some(container) = &self.container else {
            return;
        };
        if let Ok(el) = self.document.create_element("a-entity") {
            el.set_id(&particles_id(burst.id));
            _ = el.set_attribute("position", &vec3_attribute(burst.offset));
            _ = el.set_attribute("particle-system", &burst.to_attribute());
            _ = container.append_child(&el);
        }
    }

    pub fn detach_particles(&self, id: EffectId) {
        if let Some(el) = self.document.get_element_by_id(&particles_id(id)) {
            el.remove();
        }
    }

    pub fn configure_renderer(&self, settings: &RendererSettings) {
        _ = self.scene.set_attribute("renderer", &settings.to_attribute());
    }
}

#[inline]
fn particles_id(id: EffectId) -> String {
    format!("chest-particles-{}", id)
}
