use chest_core::{Command, Pointer, TransitionError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::input;
use crate::{Bindings, SharedExperience};

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub experience: SharedExperience,
    pub bindings: Rc<Bindings>,
}

impl InputWiring {
    /// Apply a transition outcome; refusals are expected and only logged.
    fn apply(&self, tag: &str, result: Result<Vec<Command>, TransitionError>) {
        match result {
            Ok(commands) => self.bindings.apply(&commands),
            Err(e) => log::debug!("[{}] ignored: {}", tag, e),
        }
    }

    /// Shared placement path for clicks and touches.
    fn tap(&self, pointer: Option<Pointer>) {
        let Some(pointer) = pointer else {
            return;
        };
        let result = {
            let mut exp = self.experience.borrow_mut();
            exp.set_camera(self.bindings.scene.camera());
            exp.tap(pointer)
        };
        self.apply("placement", result);
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_controls(&w);
    wire_scene_click(&w);
    wire_scene_touchstart(&w);
}

fn wire_controls(w: &InputWiring) {
    let scan = w.clone();
    dom::add_click_listener(&w.document, SCAN_BUTTON_ID, move || {
        let result = scan.experience.borrow_mut().scan();
        scan.apply("scan", result);
    });

    let open = w.clone();
    dom::add_click_listener(&w.document, OPEN_BUTTON_ID, move || {
        let result = open
            .experience
            .borrow_mut()
            .press_open_control(instant::now());
        open.apply("chest", result);
    });

    let close = w.clone();
    dom::add_click_listener(&w.document, CLOSE_REWARD_ID, move || {
        let commands = close.experience.borrow_mut().close_reward(instant::now());
        close.bindings.apply(&commands);
    });
}

fn wire_scene_click(w: &InputWiring) {
    let w2 = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        w2.tap(Pointer::from_click(input::click_intersection(&ev)));
    }) as Box<dyn FnMut(_)>);
    _ = w
        .bindings
        .scene
        .scene()
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_scene_touchstart(w: &InputWiring) {
    let w2 = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // only worth a hit test while the flow is waiting for placement
        let waiting = {
            let exp = w2.experience.borrow();
            exp.session().surface_scanned() && !exp.session().chest_placed()
        };
        if waiting {
            let touches = input::touch_points(&ev);
            w2.tap(Pointer::from_touches(&touches, dom::viewport_size()));
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .bindings
        .scene
        .scene()
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}
