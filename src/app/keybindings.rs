//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;
use super::code_buffer::CursorMove;
use super::execution::ExecutionKind;
use super::split::Axis;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "q", "</>")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+R", "h / ←")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Run")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const BACK: usize = 2;
        pub const PANE_SWITCH: usize = 3;
        pub const CYCLE_FOCUS: usize = 4;
        pub const FULLSCREEN: usize = 5;
        pub const EXIT_FULLSCREEN: usize = 6;
        pub const RUN: usize = 7;
        pub const SUBMIT: usize = 8;
        pub const EDIT: usize = 9;
        pub const RESET_CODE: usize = 10;
        pub const PROBLEM_NAV: usize = 11;
    }

    pub mod layout {
        pub const WIDEN_LEFT: usize = 0;
        pub const NARROW_LEFT: usize = 1;
        pub const GROW_EDITOR: usize = 2;
        pub const SHRINK_EDITOR: usize = 3;
        pub const DRAG: usize = 4;
    }

    pub mod panes {
        pub const TABS: usize = 0;
        pub const CASES: usize = 1;
    }

    pub mod insert {
        pub const ESC_NORMAL: usize = 0;
        pub const RUN: usize = 1;
        pub const SUBMIT: usize = 2;
        pub const MOVE: usize = 3;
    }

    pub mod help {
        pub const CLOSE: usize = 0;
        pub const QUIT: usize = 1;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::OpenHelp,
    },
    // idx 2: BACK
    KeyBinding {
        key_short: "b",
        key: "b",
        desc_short: "Back",
        description: "Leave the workspace",
        action: Action::NavigateBack,
    },
    // idx 3: PANE_SWITCH
    KeyBinding {
        key_short: "1/2/3",
        key: "1/2/3",
        desc_short: "Pane",
        description: "Focus description / editor / testcases",
        action: Action::None,
    },
    // idx 4: CYCLE_FOCUS
    KeyBinding {
        key_short: "Tab",
        key: "Tab",
        desc_short: "Next Pane",
        description: "Cycle pane focus",
        action: Action::CycleFocus,
    },
    // idx 5: FULLSCREEN
    KeyBinding {
        key_short: "f",
        key: "f",
        desc_short: "Fullscreen",
        description: "Toggle fullscreen for the focused pane",
        action: Action::ToggleFocusedFullscreen,
    },
    // idx 6: EXIT_FULLSCREEN (same key, different display)
    KeyBinding {
        key_short: "f",
        key: "f",
        desc_short: "Restore",
        description: "Restore split view",
        action: Action::ToggleFocusedFullscreen,
    },
    // idx 7: RUN
    KeyBinding {
        key_short: "r",
        key: "r",
        desc_short: "Run",
        description: "Run code against sample testcases",
        action: Action::StartExecution(ExecutionKind::Run),
    },
    // idx 8: SUBMIT
    KeyBinding {
        key_short: "s",
        key: "s",
        desc_short: "Submit",
        description: "Submit solution",
        action: Action::StartExecution(ExecutionKind::Submit),
    },
    // idx 9: EDIT
    KeyBinding {
        key_short: "i",
        key: "i / Enter",
        desc_short: "Edit",
        description: "Edit code (Insert mode)",
        action: Action::EnterInsertMode,
    },
    // idx 10: RESET_CODE
    KeyBinding {
        key_short: "R",
        key: "R",
        desc_short: "Reset",
        description: "Reset code to starter template",
        action: Action::ResetCode,
    },
    // idx 11: PROBLEM_NAV
    KeyBinding {
        key_short: "n/p",
        key: "n / p",
        desc_short: "Problem",
        description: "Next / previous problem",
        action: Action::None,
    },
];

/// Pane resizing; dividers can also be dragged with the mouse
pub const LAYOUT_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: ">",
        key: ">",
        desc_short: "Widen",
        description: "Widen description pane",
        action: Action::GrowPane(Axis::Horizontal),
    },
    KeyBinding {
        key_short: "<",
        key: "<",
        desc_short: "Narrow",
        description: "Narrow description pane",
        action: Action::ShrinkPane(Axis::Horizontal),
    },
    KeyBinding {
        key_short: "+",
        key: "+ / =",
        desc_short: "Grow",
        description: "Grow editor over testcases",
        action: Action::GrowPane(Axis::Vertical),
    },
    KeyBinding {
        key_short: "-",
        key: "-",
        desc_short: "Shrink",
        description: "Shrink editor under testcases",
        action: Action::ShrinkPane(Axis::Vertical),
    },
    KeyBinding {
        key_short: "drag",
        key: "Mouse drag",
        desc_short: "Resize",
        description: "Drag a divider to resize panes",
        action: Action::None,
    },
];

pub const PANE_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "[/]",
        key: "[ / ]",
        desc_short: "Tab",
        description: "Description / Test Result tab",
        action: Action::None,
    },
    KeyBinding {
        key_short: "h/l",
        key: "h / l",
        desc_short: "Case",
        description: "Previous / next sample testcase",
        action: Action::None,
    },
];

pub const INSERT_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Normal",
        description: "Leave Insert mode",
        action: Action::ExitInsertMode,
    },
    KeyBinding {
        key_short: "^R",
        key: "Ctrl+R",
        desc_short: "Run",
        description: "Run code",
        action: Action::StartExecution(ExecutionKind::Run),
    },
    KeyBinding {
        key_short: "^S",
        key: "Ctrl+S",
        desc_short: "Submit",
        description: "Submit solution",
        action: Action::StartExecution(ExecutionKind::Submit),
    },
    KeyBinding {
        key_short: "←↑↓→",
        key: "Arrows / Home / End",
        desc_short: "Move",
        description: "Move cursor",
        action: Action::EditorMoveCursor(CursorMove::Left),
    },
];

pub const HELP_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "Esc/?",
        key: "Esc / ?",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];
