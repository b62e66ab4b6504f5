//! HUD overlay: control buttons, instruction line, reward card and confetti.

use chest_core::{ConfettiBurst, Control, EffectId, Reward};
use fnv::FnvHashMap;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub struct Hud {
    document: web::Document,
    scan: Option<web::HtmlElement>,
    place: Option<web::HtmlElement>,
    open: Option<web::HtmlElement>,
    instructions: Option<web::HtmlElement>,
    reward_display: Option<web::HtmlElement>,
    reward_title: Option<web::HtmlElement>,
    reward_description: Option<web::HtmlElement>,
    reward_image: Option<web::HtmlImageElement>,
    ui_container: Option<web::HtmlElement>,
    confetti: RefCell<FnvHashMap<EffectId, Vec<web::HtmlElement>>>,
}

impl Hud {
    pub fn from_document(document: &web::Document) -> Self {
        let html = |id: &str| dom::element_by_id::<web::HtmlElement>(document, id);
        Self {
            document: document.clone(),
            scan: html(SCAN_BUTTON_ID),
            place: html(PLACE_BUTTON_ID),
            open: html(OPEN_BUTTON_ID),
            instructions: html(INSTRUCTIONS_ID),
            reward_display: html(REWARD_DISPLAY_ID),
            reward_title: html(REWARD_TITLE_ID),
            reward_description: html(REWARD_DESCRIPTION_ID),
            reward_image: dom::element_by_id(document, REWARD_IMAGE_ID),
            ui_container: html(UI_CONTAINER_ID),
            confetti: RefCell::new(FnvHashMap::default()),
        }
    }

    fn control(&self, control: Control) -> Option<&web::HtmlElement> {
        match control {
            Control::Scan => self.scan.as_ref(),
            Control::Place => self.place.as_ref(),
            Control::Open => self.open.as_ref(),
        }
    }

    pub fn set_control_visible(&self, control: Control, visible: bool) {
        if let Some(el) = self.control(control) {
            dom::set_visible(el, visible);
        }
    }

    pub fn set_control_label(&self, control: Control, label: &str) {
        if let Some(el) = self.control(control) {
            el.set_text_content(Some(label));
        }
    }

    pub fn set_instructions(&self, text: &str) {
        if let Some(el) = &self.instructions {
            el.set_text_content(Some(text));
        }
    }

    pub fn show_reward(&self, reward: &Reward) {
        if let Some(img) = &self.reward_image {
            img.set_src(reward.image_url);
        }
        if let Some(el) = &self.reward_title {
            el.set_text_content(Some(reward.title));
        }
        if let Some(el) = &self.reward_description {
            el.set_text_content(Some(reward.description));
        }
        if let Some(card) = &self.reward_display {
            dom::set_style(card, "box-shadow", REWARD_GLOW_SHADOW);
            dom::set_style(card, "transform", REWARD_SHOWN_TRANSFORM);
            dom::set_style(card, "transition", REWARD_TRANSITION);
        }
    }

    pub fn hide_reward(&self) {
        if let Some(card) = &self.reward_display {
            dom::set_style(card, "transform", REWARD_HIDDEN_TRANSFORM);
        }
    }

    // ---------------- Confetti ----------------
    pub fn spawn_confetti(&self, burst: &ConfettiBurst) {
        let Some(container) = &self.ui_container else {
            return;
        };
        let mut markers = Vec::with_capacity(burst.markers.len());
        for m in &burst.markers {
            let Some(dot) = self
                .document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            let size = format!("{}px", CONFETTI_SIZE_PX);
            dom::set_style(&dot, "position", "absolute");
            dom::set_style(&dot, "width", &size);
            dom::set_style(&dot, "height", &size);
            dom::set_style(&dot, "background-color", &format!("hsl({}, 100%, 50%)", m.hue_deg));
            dom::set_style(&dot, "border-radius", "50%");
            dom::set_style(&dot, "left", "50%");
            dom::set_style(&dot, "top", "50%");
            dom::set_style(&dot, "opacity", "0");
            dom::set_style(&dot, "pointer-events", "none");
            dom::set_style(&dot, "z-index", CONFETTI_Z_INDEX);
            // target offset is applied on launch
            _ = dot.set_attribute(
                "data-offset",
                &format!("{}px, {}px", m.offset_px.x, m.offset_px.y),
            );
            _ = container.append_child(&dot);
            markers.push(dot);
        }
        self.confetti.borrow_mut().insert(burst.id, markers);
    }

    pub fn launch_confetti(&self, id: EffectId) {
        if let Some(markers) = self.confetti.borrow().get(&id) {
            for dot in markers {
                let offset = dot.get_attribute("data-offset").unwrap_or_default();
                dom::set_style(dot, "transition", CONFETTI_TRANSITION);
                dom::set_style(dot, "opacity", "1");
                dom::set_style(dot, "transform", &format!("translate({})", offset));
            }
        }
    }

    pub fn fade_confetti(&self, id: EffectId) {
        if let Some(markers) = self.confetti.borrow().get(&id) {
            for dot in markers {
                dom::set_style(dot, "opacity", "0");
            }
        }
    }

    pub fn remove_confetti(&self, id: EffectId) {
        if let Some(markers) = self.confetti.borrow_mut().remove(&id) {
            for dot in markers {
                dot.remove();
            }
        }
    }
}
