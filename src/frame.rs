use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{Bindings, SharedExperience};

pub struct FrameContext {
    pub experience: SharedExperience,
    pub bindings: Rc<Bindings>,
}

impl FrameContext {
    /// One animation frame: quality sampling plus due continuations.
    pub fn frame(&mut self, now_ms: f64) {
        let commands = self.experience.borrow_mut().frame(now_ms);
        if !commands.is_empty() {
            self.bindings.apply(&commands);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx_tick.borrow_mut().frame(now_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
