use anyhow::Context;
use std::time::Instant;
use tunnel_core::{
    FlyThrough, Gpu, InitError, PointerState, SceneConfig, SceneState, TubeMesh, TunnelPath,
    Tween, TweenSpec,
};
use winit::{dpi::PhysicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

const WINDOW_TITLE: &str = "Tunnel (native)";
const INITIAL_WIDTH: u32 = 1280;
const INITIAL_HEIGHT: u32 = 720;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT))
        .build(&event_loop)
        .context("window")?;
    let size = window.inner_size();

    let path = TunnelPath::tunnel();
    let mesh = TubeMesh::tunnel(&path);
    let config = SceneConfig::default();

    let instance = wgpu::Instance::default();
    let surface = instance
        .create_surface(&window)
        .map_err(|e| InitError::Surface(e.to_string()))?;
    let mut gpu = match pollster::block_on(Gpu::new(
        &instance,
        surface,
        size.width,
        size.height,
        &mesh,
        &config,
    )) {
        Ok(gpu) => gpu,
        Err(e) if e.is_shader_fault() => {
            log::error!("{}", e);
            return Err(e.into());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("GPU init")),
    };

    let fly = FlyThrough::new(path);
    let mut scene = SceneState::launch(&config, size.width, size.height, &fly);
    let mut tween = Tween::new(TweenSpec::fly_through());

    let window = &window;
    let mut last_instant = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                if scene.resize(size.width, size.height) {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = window.inner_size();
                scene.set_pointer(PointerState::from_screen(
                    position.x as f32,
                    position.y as f32,
                    size.width as f32,
                    size.height as f32,
                ));
            }
            WindowEvent::CloseRequested => elwt.exit(),
            _ => {}
        },
        Event::AboutToWait => {
            // tween first so the frame draws the updated pose
            let now = Instant::now();
            if let Some(progress) = tween.advance(now - last_instant) {
                scene.apply_progress(progress, &fly);
            }
            last_instant = now;

            scene.advance_frame();
            match gpu.render(&scene.packed_uniforms()) {
                Ok(()) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost, reconfiguring");
                    gpu.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] out of GPU memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("[frame] skipped: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
