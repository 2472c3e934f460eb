use crate::constants::EVENT_MOUSEMOVE;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::SceneState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window, normalized against the inner size.
pub fn wire_mousemove(scene: Rc<RefCell<SceneState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let window_for_size = window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (w, h) = dom::inner_size(&window_for_size);
        let pointer = input::pointer_from_client(
            ev.client_x() as f64,
            ev.client_y() as f64,
            w as f64,
            h as f64,
        );
        scene.borrow_mut().set_pointer(pointer);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback(EVENT_MOUSEMOVE, closure.as_ref().unchecked_ref());
    closure.forget();
}
