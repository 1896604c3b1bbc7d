use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds from the page's high-resolution clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// An event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}
