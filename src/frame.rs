use crate::dom;
use crate::events::SharedEngine;
use crate::overlay;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vergence_core::ViewState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: SharedEngine,
    pub document: web::Document,
    pub last_view: Option<ViewState>,
}

impl FrameContext {
    pub fn new(engine: SharedEngine, document: web::Document) -> Self {
        Self {
            engine,
            document,
            last_view: None,
        }
    }

    /// Fire due movement ticks, then repaint if anything visible changed.
    pub fn frame(&mut self) {
        let view = {
            let mut engine = self.engine.borrow_mut();
            engine.advance(dom::now_ms());
            engine.snapshot()
        };
        if self.last_view.as_ref() == Some(&view) {
            return;
        }
        render::apply(&self.document, &view);
        overlay::update(&self.document, &view);
        self.last_view = Some(view);
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop; cancelled when dropped.
pub struct FrameLoop {
    tick: TickClosure,
    handle: Rc<Cell<Option<i32>>>,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        handle_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request_frame(&tick));
    FrameLoop { tick, handle }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.handle.take(), web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        // Break the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}
