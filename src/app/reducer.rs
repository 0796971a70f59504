//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{
    leave_workspace, reduce_editor, reduce_execution, reduce_navigation, reduce_workspace,
};
use crate::app::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_workspace(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_editor(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_execution(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }

    match action {
        Action::CancelDragThen(click) => {
            if let Some(axis) = state.workspace.drag_axis() {
                tracing::debug!(?axis, "drag release lost, ending drag on press");
            }
            state.workspace.end_drag();
            reduce_inner(state, *click, now)
        }
        Action::Quit => leave_workspace(state),
        Action::Resize(w, h) => {
            state.ui.terminal_width = w;
            state.ui.terminal_height = h;
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::execution::ExecutionKind;
    use crate::app::layout::compute_workspace_layout;
    use crate::app::split::Axis;
    use crate::app::test_support::sample_state;
    use crate::app::workspace::FullscreenPane;
    use ratatui::layout::Rect;
    use std::time::Duration;

    #[test]
    fn render_clears_dirty_flag() {
        let mut state = sample_state(Instant::now());

        let effects = reduce(&mut state, Action::Render, Instant::now());

        assert_eq!(effects, vec![Effect::Render]);
        assert!(!state.render_dirty);
    }

    #[test]
    fn render_drops_expired_message() {
        let start = Instant::now();
        let mut state = sample_state(start);
        state.messages.success("Run finished", start);

        reduce(&mut state, Action::Render, start + Duration::from_secs(3));

        assert!(state.messages.current.is_none());
    }

    #[test]
    fn none_keeps_state_clean() {
        let mut state = sample_state(Instant::now());
        state.clear_dirty();

        reduce(&mut state, Action::None, Instant::now());

        assert!(!state.render_dirty);
    }

    #[test]
    fn every_drag_move_marks_dirty() {
        let mut state = sample_state(Instant::now());
        state.ui.geometry =
            compute_workspace_layout(Rect::new(0, 1, 106, 40), &state.workspace);
        reduce(
            &mut state,
            Action::BeginDrag {
                axis: Axis::Horizontal,
                x: 50,
                y: 3,
            },
            Instant::now(),
        );

        for x in 51..60 {
            state.clear_dirty();
            reduce(&mut state, Action::DragMove { x, y: 3 }, Instant::now());
            assert!(state.render_dirty);
        }
    }

    #[test]
    fn quit_cancels_executions_and_releases_capture() {
        let now = Instant::now();
        let mut state = sample_state(now);
        reduce(&mut state, Action::StartExecution(ExecutionKind::Run), now);
        reduce(
            &mut state,
            Action::BeginDrag {
                axis: Axis::Vertical,
                x: 80,
                y: 20,
            },
            now,
        );

        let effects = reduce(&mut state, Action::Quit, now);

        assert_eq!(effects, vec![Effect::CancelExecutions]);
        assert!(state.should_quit);
        assert!(!state.workspace.capture().is_captured());
        assert!(!state.execution.any_pending());
    }

    #[test]
    fn press_with_stale_capture_ends_drag_then_clicks() {
        let now = Instant::now();
        let mut state = sample_state(now);
        reduce(
            &mut state,
            Action::BeginDrag {
                axis: Axis::Horizontal,
                x: 50,
                y: 3,
            },
            now,
        );

        let effects = reduce(
            &mut state,
            Action::CancelDragThen(Box::new(Action::StartExecution(ExecutionKind::Run))),
            now,
        );

        assert!(state.workspace.drag_session().is_none());
        assert_eq!(state.workspace.capture().listener_count(), 0);
        assert_eq!(
            effects,
            vec![Effect::SpawnExecution {
                kind: ExecutionKind::Run,
                generation: 1,
            }]
        );
    }

    #[test]
    fn move_and_release_without_session_change_nothing() {
        let mut state = sample_state(Instant::now());
        state.ui.geometry =
            compute_workspace_layout(Rect::new(0, 1, 106, 40), &state.workspace);

        reduce(&mut state, Action::DragMove { x: 90, y: 3 }, Instant::now());
        reduce(&mut state, Action::EndDrag, Instant::now());

        assert_eq!(state.workspace.horizontal_split().get(), 50.0);
        assert_eq!(state.workspace.vertical_split().get(), 70.0);
        assert!(!state.workspace.capture().is_captured());
    }

    #[test]
    fn left_fullscreen_toggle_round_trip_restores_dividers() {
        let mut state = sample_state(Instant::now());

        reduce(
            &mut state,
            Action::ToggleFullscreen(FullscreenPane::Left),
            Instant::now(),
        );
        assert!(!state.workspace.divider_visible(Axis::Horizontal));
        assert!(state.workspace.divider_visible(Axis::Vertical));

        reduce(
            &mut state,
            Action::ToggleFullscreen(FullscreenPane::Left),
            Instant::now(),
        );
        assert!(state.workspace.divider_visible(Axis::Horizontal));
    }

    #[test]
    fn resize_records_terminal_size() {
        let mut state = sample_state(Instant::now());

        reduce(&mut state, Action::Resize(120, 40), Instant::now());

        assert_eq!(
            (state.ui.terminal_width, state.ui.terminal_height),
            (120, 40)
        );
    }
}
