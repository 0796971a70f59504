//! Navigation sub-reducer: focus, tabs, sample testcases, problem switching,
//! help overlay and the context-dependent Escape.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::input_mode::InputMode;
use crate::app::reducers::toggle_fullscreen;
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;

/// Leaves the workspace: capture released, executions aborted.
pub fn leave_workspace(state: &mut AppState) -> Vec<Effect> {
    state.workspace.dispose();
    state.execution.reset();
    state.should_quit = true;
    vec![Effect::CancelExecutions]
}

fn navigate_to(state: &mut AppState, number: u32, now: Instant) -> Vec<Effect> {
    if number == state.current_problem().number {
        return vec![];
    }
    let Some(problem) = state.problems.by_number(number).cloned() else {
        tracing::warn!(number, "navigation to unknown problem");
        state
            .messages
            .error(format!("Problem {number} not found"), now);
        return vec![];
    };
    tracing::info!(
        from = state.current_problem().number,
        to = number,
        "switching problem"
    );
    state.load_problem(problem, now);
    state.ui.input_mode = InputMode::Normal;
    vec![Effect::CancelExecutions]
}

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::SetFocusedPane(pane) => {
            state.ui.focused_pane = *pane;
            Some(vec![])
        }
        Action::CycleFocus => {
            state.ui.focused_pane = state.ui.focused_pane.next();
            Some(vec![])
        }
        Action::SelectTab(tab) => {
            state.session.active_tab = *tab;
            Some(vec![])
        }
        Action::NextTab => {
            state.session.active_tab = state.session.active_tab.next();
            Some(vec![])
        }
        Action::PrevTab => {
            state.session.active_tab = state.session.active_tab.prev();
            Some(vec![])
        }
        Action::SelectTestCase(id) => {
            state.session.select_test_case(id);
            Some(vec![])
        }
        Action::NextTestCase => {
            state.session.next_test_case();
            Some(vec![])
        }
        Action::PrevTestCase => {
            state.session.prev_test_case();
            Some(vec![])
        }
        Action::NavigateBack => {
            tracing::info!("leaving workspace");
            Some(leave_workspace(state))
        }
        Action::NavigateToProblem(number) => Some(navigate_to(state, *number, now)),
        Action::NextProblem => {
            let current = state.current_problem().number;
            Some(
                state
                    .problems
                    .next_number(current)
                    .map(|n| navigate_to(state, n, now))
                    .unwrap_or_default(),
            )
        }
        Action::PrevProblem => {
            let current = state.current_problem().number;
            Some(
                state
                    .problems
                    .prev_number(current)
                    .map(|n| navigate_to(state, n, now))
                    .unwrap_or_default(),
            )
        }
        Action::OpenHelp => {
            state.ui.input_mode = InputMode::Help;
            Some(vec![])
        }
        Action::CloseHelp => {
            if state.ui.input_mode == InputMode::Help {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::Escape => {
            if state.ui.input_mode != InputMode::Normal {
                state.ui.input_mode = InputMode::Normal;
            } else if state.workspace.drag_session().is_some() {
                state.workspace.end_drag();
            } else {
                let active = state.workspace.fullscreen();
                if active != FullscreenPane::None {
                    toggle_fullscreen(state, active);
                }
            }
            Some(vec![])
        }
        _ => None,
    }
}
