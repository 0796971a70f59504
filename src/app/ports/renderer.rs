use color_eyre::eyre::Result;

use crate::app::layout::WorkspaceGeometry;
use crate::app::state::AppState;

#[derive(Debug, Default)]
pub struct RenderOutput {
    /// Pane rectangles of the frame just drawn
    pub geometry: WorkspaceGeometry,
}

pub trait Renderer {
    fn draw(&mut self, state: &mut AppState) -> Result<RenderOutput>;
}
