pub mod pointer;
pub mod resize;

pub use pointer::wire_pointermove;
pub use resize::wire_resize;
