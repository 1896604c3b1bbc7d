use super::{fullscreen, SharedEngine};
use crate::dom::{self, EventListener};
use vergence_core::KeyResponse;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn finish(ev: &web::KeyboardEvent, response: KeyResponse) {
    if response.is_handled() {
        ev.prevent_default();
    }
    if let KeyResponse::Fullscreen(request) = response {
        fullscreen::request(request);
    }
}

pub fn handle_key_down(ev: &web::KeyboardEvent, engine: &SharedEngine) {
    let response = engine
        .borrow_mut()
        .handle_key_down(&ev.key(), ev.repeat(), dom::now_ms());
    finish(ev, response);
}

pub fn handle_key_up(ev: &web::KeyboardEvent, engine: &SharedEngine) {
    let response = engine.borrow_mut().handle_key_up(&ev.key(), dom::now_ms());
    finish(ev, response);
}

/// Keydown/keyup drive the engine; losing focus releases every held key
/// since the matching keyup will go to another window.
pub fn wire_keyboard(
    window: &web::Window,
    engine: &SharedEngine,
) -> Result<Vec<EventListener>, JsValue> {
    let down_engine = engine.clone();
    let down = EventListener::new(window, "keydown", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_key_down(ev, &down_engine);
        }
    })?;

    let up_engine = engine.clone();
    let up = EventListener::new(window, "keyup", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_key_up(ev, &up_engine);
        }
    })?;

    let blur_engine = engine.clone();
    let blur = EventListener::new(window, "blur", move |_ev: web::Event| {
        log::debug!("[keys] window blurred; releasing held keys");
        blur_engine.borrow_mut().release_all();
    })?;

    Ok(vec![down, up, blur])
}
