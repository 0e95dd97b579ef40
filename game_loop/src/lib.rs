pub mod clock;
pub mod render;
pub mod runner;

pub use clock::FrameClock;
pub use render::{NullRenderer, RenderError, Renderer};
pub use runner::{GameLoop, LoopError};
