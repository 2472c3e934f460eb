use crate::constants::EVENT_RESIZE;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Follow window resizes: canvas backing size, viewport and camera aspect.
/// The GPU surface catches up on the next frame.
pub fn wire_resize(scene: Rc<RefCell<SceneState>>, canvas: web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let window_for_size = window.clone();

    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::inner_size(&window_for_size);
        if scene.borrow_mut().resize(w, h) {
            dom::set_canvas_size(&canvas, w, h);
        } else {
            log::debug!("[resize] ignoring {}x{}", w, h);
        }
    }) as Box<dyn FnMut()>);

    _ = window.add_event_listener_with_callback(EVENT_RESIZE, closure.as_ref().unchecked_ref());
    closure.forget();
}
