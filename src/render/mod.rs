//! Drawing: the pixel-level board painter and the terminal screens around it.

pub mod board;
pub mod frame_view;
pub mod renderer;
pub mod surface;

pub use board::BoardPainter;
pub use frame_view::FrameView;
pub use renderer::{LoginView, PlayView, Renderer};
pub use surface::{FrameBuffer, Surface};
