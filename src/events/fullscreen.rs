use super::SharedEngine;
use crate::dom::{self, EventListener};
use vergence_core::FullscreenRequest;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn is_fullscreen(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

// `requestFullscreen`/`exitFullscreen` return promises; call them reflectively
// so a rejection can be observed and logged.
fn call_promise_method(target: &JsValue, method: &str) -> Result<js_sys::Promise, JsValue> {
    let func: js_sys::Function = js_sys::Reflect::get(target, &JsValue::from_str(method))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{} is not supported", method)))?;
    let result = func.call0(target)?;
    Ok(result
        .dyn_into::<js_sys::Promise>()
        .unwrap_or_else(|_| js_sys::Promise::resolve(&JsValue::UNDEFINED)))
}

/// Fire-and-forget fullscreen request. The engine's flag only changes when
/// the `fullscreenchange` event reports the result.
pub fn request(request: FullscreenRequest) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let (target, method): (JsValue, &str) = match request {
        FullscreenRequest::Enter => match document.document_element() {
            Some(el) => (el.into(), "requestFullscreen"),
            None => return,
        },
        FullscreenRequest::Exit => (document.into(), "exitFullscreen"),
    };
    match call_promise_method(&target, method) {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[fullscreen] {:?} request failed: {:?}", request, e);
            }
        }),
        Err(e) => log::warn!("[fullscreen] {:?} request failed: {:?}", request, e),
    }
}

pub fn wire_fullscreen_change(
    document: &web::Document,
    engine: &SharedEngine,
) -> Result<EventListener, JsValue> {
    if is_fullscreen(document) {
        engine.borrow_mut().on_fullscreen_change(true);
    }
    let doc = document.clone();
    let engine = engine.clone();
    EventListener::new(document, "fullscreenchange", move |_ev: web::Event| {
        engine.borrow_mut().on_fullscreen_change(is_fullscreen(&doc));
    })
}
