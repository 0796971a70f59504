//! Workspace sub-reducer: divider drags, keyboard resize, fullscreen.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::drag::PointerListener;
use crate::app::effect::Effect;
use crate::app::focused_pane::FocusedPane;
use crate::app::split::{Axis, RESIZE_STEP};
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;

fn position_on(axis: Axis, x: u16, y: u16) -> i32 {
    match axis {
        Axis::Horizontal => i32::from(x),
        Axis::Vertical => i32::from(y),
    }
}

/// Keeps focus on a pane that is still on screen after a fullscreen change.
fn follow_fullscreen_focus(state: &mut AppState) {
    let focus = state.ui.focused_pane;
    state.ui.focused_pane = match state.workspace.fullscreen() {
        FullscreenPane::Left => FocusedPane::Description,
        FullscreenPane::Bottom => FocusedPane::TestCases,
        FullscreenPane::Right if focus == FocusedPane::Description => FocusedPane::Editor,
        _ => focus,
    };
}

/// Shared by the fullscreen keys, the badge click and Escape.
pub fn toggle_fullscreen(state: &mut AppState, pane: FullscreenPane) {
    state.workspace.toggle_fullscreen(pane);
    follow_fullscreen_focus(state);
    tracing::debug!(fullscreen = ?state.workspace.fullscreen(), "fullscreen toggled");
}

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_workspace(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::BeginDrag { axis, x, y } => {
            let pos = position_on(*axis, *x, *y);
            if state.workspace.begin_drag(*axis, pos) {
                tracing::debug!(?axis, pos, "drag started");
            }
            Some(vec![])
        }
        Action::DragMove { x, y } => {
            if !state.workspace.capture().has(PointerListener::Move) {
                return Some(vec![]);
            }
            if let Some(axis) = state.workspace.drag_axis() {
                let extent = state.ui.geometry.extent(axis);
                state
                    .workspace
                    .drag_move(position_on(axis, *x, *y), extent);
            }
            Some(vec![])
        }
        Action::EndDrag => {
            if let Some(axis) = state.workspace.drag_axis() {
                tracing::debug!(
                    ?axis,
                    ratio = state.workspace.ratio(axis).get(),
                    "drag finished"
                );
            }
            state.workspace.end_drag();
            Some(vec![])
        }
        Action::GrowPane(axis) => {
            state.workspace.resize_step(*axis, RESIZE_STEP);
            Some(vec![])
        }
        Action::ShrinkPane(axis) => {
            state.workspace.resize_step(*axis, -RESIZE_STEP);
            Some(vec![])
        }
        Action::ToggleFullscreen(pane) => {
            toggle_fullscreen(state, *pane);
            Some(vec![])
        }
        Action::ToggleFocusedFullscreen => {
            let pane = state.ui.focused_pane.fullscreen_target();
            toggle_fullscreen(state, pane);
            Some(vec![])
        }
        _ => None,
    }
}
