use std::cell::RefCell;
use std::rc::Rc;

use drift_core::PointerState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Track the latest pointer position in normalized coordinates. Listening
/// on the window keeps parallax alive even when other page content sits
/// above the canvas.
pub fn wire_pointermove(pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |event: web::PointerEvent| {
        if let Some(window) = web::window() {
            let viewport = dom::viewport_size(&window);
            *pointer.borrow_mut() = PointerState::from_client(
                event.client_x() as f32,
                event.client_y() as f32,
                viewport,
            );
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        let _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
