use game_core::Simulation;
use thiserror::Error;

/// Failure while handing a frame to the host's drawing layer.
///
/// Render failures never kill the loop; they are logged and the next
/// tick proceeds.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("render failed: {0}")]
    Other(String),
}

/// The seam between the simulation and the host's drawing layer.
///
/// `render` is called once per tick while the loop holds the state lock,
/// so it never observes a partially applied update.
pub trait Renderer: Send {
    fn render(&mut self, sim: &Simulation) -> Result<(), RenderError>;
}

/// Renderer that draws nothing; useful for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _sim: &Simulation) -> Result<(), RenderError> {
        Ok(())
    }
}
