use super::focused_pane::FocusedPane;
use super::input_mode::InputMode;
use super::layout::WorkspaceGeometry;

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focused_pane: FocusedPane,
    pub input_mode: InputMode,

    /// Geometry of the last rendered frame; hit-testing and drag extents
    /// read it, only the renderer writes it.
    pub geometry: WorkspaceGeometry,

    pub terminal_width: u16,
    pub terminal_height: u16,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            terminal_width: 80,
            terminal_height: 24,
            ..Default::default()
        }
    }
}
