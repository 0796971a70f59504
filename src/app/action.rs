use crate::app::code_buffer::CursorMove;
use crate::app::execution::ExecutionKind;
use crate::app::focused_pane::FocusedPane;
use crate::app::problem_tab::ProblemTab;
use crate::app::split::Axis;
use crate::app::workspace::FullscreenPane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Render,
    Resize(u16, u16),

    // Divider drag (terminal cell coordinates)
    BeginDrag { axis: Axis, x: u16, y: u16 },
    DragMove { x: u16, y: u16 },
    EndDrag,
    /// Press while a drag still holds the capture (its release was lost):
    /// the drag ends, then the press is handled as a normal click.
    CancelDragThen(Box<Action>),

    // Keyboard resize
    GrowPane(Axis),
    ShrinkPane(Axis),

    // Fullscreen
    ToggleFullscreen(FullscreenPane),
    ToggleFocusedFullscreen,

    // Focus
    SetFocusedPane(FocusedPane),
    CycleFocus,

    // Tabs and sample testcases
    SelectTab(ProblemTab),
    NextTab,
    PrevTab,
    SelectTestCase(String),
    NextTestCase,
    PrevTestCase,

    // Code editor
    EnterInsertMode,
    ExitInsertMode,
    EditorInput(char),
    EditorNewLine,
    EditorTab,
    EditorBackspace,
    EditorDelete,
    EditorMoveCursor(CursorMove),
    EditorPaste(String),
    ResetCode,

    // Simulated execution
    StartExecution(ExecutionKind),
    ExecutionFinished { kind: ExecutionKind, generation: u64 },
    ExecutionFailed {
        kind: ExecutionKind,
        generation: u64,
        error: String,
    },

    // Navigation intents
    NavigateBack,
    NavigateToProblem(u32),
    NextProblem,
    PrevProblem,

    // Overlays
    OpenHelp,
    CloseHelp,

    /// Context-dependent close
    Escape,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
