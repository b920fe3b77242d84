use std::cell::RefCell;
use std::rc::Rc;

use drift_core::ResizeDebouncer;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Feed window resizes into the shared debouncer. The frame loop polls it
/// and applies only the final dimensions once the quiet period passes.
pub fn wire_resize(debouncer: Rc<RefCell<ResizeDebouncer>>, started: Instant) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let viewport = dom::viewport_size(&window);
            let now_ms = started.elapsed().as_secs_f64() * 1000.0;
            debouncer.borrow_mut().submit(viewport, now_ms);
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
