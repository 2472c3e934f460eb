use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{Gpu, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub gpu: Gpu<'static>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Scene borrow ends before touching the GPU.
        let (viewport, uniforms) = {
            let mut scene = self.scene.borrow_mut();
            scene.advance_frame();
            (scene.viewport, scene.packed_uniforms())
        };

        self.gpu.resize(viewport.width, viewport.height);
        match self.gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::warn!("[frame] skipped: {:?}", e),
        }
    }
}

/// Run `step` once per animation frame, forever.
pub fn start_loop(mut step: impl FnMut() + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        step();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
