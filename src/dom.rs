use crate::constants::{CANVAS_ID, CANVAS_STYLE};
use crate::input;
use tunnel_core::InitError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, InitError> {
    web::window().ok_or(InitError::MissingDom("window"))
}

/// Window inner size in CSS pixels.
pub fn inner_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    input::viewport_from_inner(w, h)
}

/// Create the drawing canvas and append it to `<body>`.
pub fn create_canvas(
    window: &web::Window,
    width: u32,
    height: u32,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window.document().ok_or(InitError::MissingDom("document"))?;
    let body = document.body().ok_or(InitError::MissingDom("body"))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    canvas.set_id(CANVAS_ID);
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    set_canvas_size(&canvas, width, height);

    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}
