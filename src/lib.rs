#![cfg(target_arch = "wasm32")]
use crate::dom::EventListener;
use crate::events::SharedEngine;
use crate::storage::LocalStorage;
use std::cell::RefCell;
use std::rc::Rc;
use vergence_core::{ControlEngine, EngineConfig, ExerciseKind, SizeBound};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
pub mod storage;

/// Everything a running exercise holds on to. Dropping it unregisters every
/// listener, stops the frame loop and cancels outstanding movement ticks.
struct Session {
    engine: SharedEngine,
    _listeners: Vec<EventListener>,
    _frame_loop: frame::FrameLoop,
}

impl Drop for Session {
    fn drop(&mut self) {
        self.engine.borrow_mut().end_session();
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn with_engine(f: impl FnOnce(&SharedEngine)) {
    SESSION.with(|session| {
        if let Some(session) = session.borrow().as_ref() {
            f(&session.engine);
        }
    });
}

/// Exercise and engine preset from the root element's data attributes.
fn read_exercise_config(document: &web::Document) -> (ExerciseKind, EngineConfig) {
    let root = document.get_element_by_id(constants::ROOT_ID);
    let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));

    let kind = match attr(constants::EXERCISE_ATTR) {
        Some(slug) => ExerciseKind::from_slug(&slug).unwrap_or_else(|| {
            log::warn!("unknown exercise '{}', using {:?}", slug, ExerciseKind::default());
            ExerciseKind::default()
        }),
        None => ExerciseKind::default(),
    };
    let mut config = match attr(constants::CONTROLS_ATTR).as_deref() {
        Some("classic") => EngineConfig::classic().with_base_step(kind.base_step()),
        _ => kind.engine_config(),
    };
    if attr(constants::SIZE_BOUND_ATTR).as_deref() == Some("narrow") {
        config.size_bound = SizeBound::Narrow;
    }
    (kind, config)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vergence-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (kind, config) = read_exercise_config(&document);
    log::info!("[init] exercise={} config={:?}", kind.title(), config);
    overlay::init(&document, kind.title(), config.intensity_controls);

    let storage = LocalStorage::from_window();
    if !storage.is_available() {
        log::warn!("[init] localStorage unavailable; settings will not persist");
    }
    let engine: SharedEngine = Rc::new(RefCell::new(ControlEngine::new(config, storage)));
    engine.borrow_mut().start_session();

    let js_err = |e: JsValue| anyhow::anyhow!("{:?}", e);
    let mut listeners = events::keyboard::wire_keyboard(&window, &engine).map_err(js_err)?;
    listeners.push(events::fullscreen::wire_fullscreen_change(&document, &engine).map_err(js_err)?);
    listeners.extend(wire_buttons(&document, &engine).map_err(js_err)?);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        engine.clone(),
        document.clone(),
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session {
            engine,
            _listeners: listeners,
            _frame_loop: frame_loop,
        });
    });
    wire_teardown(&window);
    Ok(())
}

fn wire_buttons(
    document: &web::Document,
    engine: &SharedEngine,
) -> Result<Vec<EventListener>, JsValue> {
    let mut listeners = Vec::new();
    if let Some(el) = document.get_element_by_id(constants::INSTRUCTIONS_CLOSE_ID) {
        let engine = engine.clone();
        listeners.push(EventListener::new(&el, "click", move |_ev: web::Event| {
            engine.borrow_mut().set_show_instructions(false);
        })?);
    }
    if let Some(el) = document.get_element_by_id(constants::SETTINGS_RESET_ID) {
        let engine = engine.clone();
        listeners.push(EventListener::new(&el, "click", move |_ev: web::Event| {
            engine.borrow_mut().reset_settings();
        })?);
    }
    Ok(listeners)
}

// The teardown listener lives outside the session so it is not dropped
// while it runs.
fn wire_teardown(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move || {
        if SESSION.with(|session| session.borrow_mut().take()).is_some() {
            log::info!("[teardown] session released");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Toggle fullscreen from UI controls (e.g. a button).
#[wasm_bindgen]
pub fn toggle_fullscreen() {
    let mut request = None;
    with_engine(|engine| request = Some(engine.borrow().toggle_fullscreen()));
    if let Some(request) = request {
        events::fullscreen::request(request);
    }
}

/// Show or hide the instructions panel from UI controls.
#[wasm_bindgen]
pub fn set_show_instructions(show: bool) {
    with_engine(|engine| engine.borrow_mut().set_show_instructions(show));
}

/// Current view state as JSON, for page scripts that draw their own shapes.
#[wasm_bindgen]
pub fn view_state_json() -> Option<String> {
    let mut json = None;
    with_engine(|engine| {
        let view = engine.borrow().snapshot();
        json = serde_json::to_string(&serde_json::json!({
            "horizontalSeparation": view.horizontal_separation,
            "verticalSeparation": view.vertical_separation,
            "showInstructions": view.show_instructions,
            "isFullscreen": view.is_fullscreen,
            "settings": view.settings,
        }))
        .ok();
    });
    json
}
