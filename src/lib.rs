#![cfg(target_arch = "wasm32")]
use chest_core::Experience;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod bindings;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod scene;

pub(crate) use bindings::Bindings;

pub(crate) type SharedExperience = Rc<RefCell<Experience<StdRng>>>;

fn wire_scene_loaded(experience: &SharedExperience, bindings: &Rc<Bindings>) {
    let exp = experience.clone();
    let b = bindings.clone();
    let on_loaded = move || {
        b.scene.hide_loader();
        exp.borrow_mut().scene_loaded();
    };
    // the module may finish loading after A-Frame already fired `loaded`
    if bindings.scene.has_loaded() {
        on_loaded();
        return;
    }
    let closure = Closure::wrap(Box::new(on_loaded) as Box<dyn FnMut()>);
    _ = bindings
        .scene
        .scene()
        .add_event_listener_with_callback("loaded", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("chest-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scene = document
        .query_selector(constants::SCENE_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing <{}>", constants::SCENE_SELECTOR))?;
    for id in [constants::CHEST_CONTAINER_ID, constants::GROUND_PLANE_ID] {
        if document.get_element_by_id(id).is_none() {
            anyhow::bail!("missing #{}", id);
        }
    }

    let bindings = Rc::new(Bindings::new(&document, scene));
    let experience: SharedExperience =
        Rc::new(RefCell::new(Experience::new(StdRng::from_entropy())));
    bindings.apply(&experience.borrow().initial_commands());

    wire_scene_loaded(&experience, &bindings);
    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        experience: experience.clone(),
        bindings: bindings.clone(),
    });
    events::wire_gesture_handlers(&document, experience.clone(), bindings.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        experience,
        bindings,
    }));
    frame::start_loop(frame_ctx);
    log::info!("chest-web ready");
    Ok(())
}
