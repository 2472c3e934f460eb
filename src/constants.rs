/// Web front-end constants.
///
/// Scene and shader tuning lives in `tunnel_core::constants`; this file only
/// holds what the browser shell needs.
// Console log level used by `console_log`
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Canvas element created at startup and appended to <body>
pub const CANVAS_ID: &str = "tunnel-canvas";
pub const CANVAS_STYLE: &str = "display:block;width:100vw;height:100vh";

// Events consumed from `window`
pub const EVENT_MOUSEMOVE: &str = "mousemove";
pub const EVENT_RESIZE: &str = "resize";
