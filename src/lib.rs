#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use tunnel_core::{
    FlyThrough, Gpu, InitError, SceneConfig, SceneState, TubeMesh, TunnelPath, TweenSpec,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod tween;

thread_local! {
    // Set once init succeeds; read by the exported toggle.
    static SCENE: RefCell<Option<Rc<RefCell<SceneState>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("tunnel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            match e.downcast_ref::<InitError>() {
                Some(fault) if fault.is_shader_fault() => log::error!("{}", fault),
                _ => log::error!("init error: {:?}", e),
            }
        }
    });
    Ok(())
}

/// Enable or disable the scrolling noise on the tunnel walls.
#[wasm_bindgen]
pub fn toggle_displacement(enable: bool) {
    SCENE.with(|slot| match slot.borrow().as_ref() {
        Some(scene) => scene.borrow_mut().toggle_displacement(enable),
        None => log::warn!("toggle_displacement({}) called before init", enable),
    });
}

async fn init() -> anyhow::Result<()> {
    let window = dom::window()?;
    let (width, height) = dom::inner_size(&window);
    let canvas = dom::create_canvas(&window, width, height)?;

    let path = TunnelPath::tunnel();
    let mesh = TubeMesh::tunnel(&path);
    let config = SceneConfig::default();

    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| InitError::Surface(e.to_string()))?;
    let gpu = Gpu::new(&instance, surface, width, height, &mesh, &config)
        .await
        .context("WebGPU init")?;

    let fly = FlyThrough::new(path);
    let scene = Rc::new(RefCell::new(SceneState::launch(&config, width, height, &fly)));
    SCENE.with(|slot| *slot.borrow_mut() = Some(scene.clone()));

    events::wire_mousemove(scene.clone());
    events::wire_resize(scene.clone(), canvas);

    let mut tween_ctx = tween::TweenContext::new(scene.clone(), fly, TweenSpec::fly_through());
    frame::start_loop(move || tween_ctx.update());

    let mut frame_ctx = frame::FrameContext { scene, gpu };
    frame::start_loop(move || frame_ctx.frame());
    Ok(())
}
