use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;
use crate::{Bindings, SharedExperience};

/// Pinch and drag gestures on the whole document.
pub fn wire_gesture_handlers(
    document: &web::Document,
    experience: SharedExperience,
    bindings: Rc<Bindings>,
) {
    // Non-passive so multi-touch can suppress browser zoom/scroll.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);

    let exp_start = experience.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev);
        if exp_start.borrow_mut().touch_start(&touches) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        start.as_ref().unchecked_ref(),
        &opts,
    );
    start.forget();

    let exp_move = experience.clone();
    let move_cb = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev);
        let commands = exp_move.borrow_mut().touch_move(&touches);
        if !commands.is_empty() {
            ev.prevent_default();
            bindings.apply(&commands);
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        move_cb.as_ref().unchecked_ref(),
        &opts,
    );
    move_cb.forget();

    let end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        experience.borrow_mut().touch_end();
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref());
    end.forget();
}
