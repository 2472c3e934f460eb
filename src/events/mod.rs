mod pointer;
mod resize;

pub use pointer::wire_mousemove;
pub use resize::wire_resize;
