pub mod fixtures;

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use codepane::app::action::Action;
use codepane::app::effect::Effect;
use codepane::app::reducer::reduce;
use codepane::app::state::AppState;
use codepane::app::workspace::WorkspaceState;
use codepane::ui::components::layout::MainLayout;
use codepane::ui::event::Event;
use codepane::ui::event::handler::handle_event;

/// 101-cell workspace plus the 6-cell navigator
pub const TEST_WIDTH: u16 = 107;
pub const TEST_HEIGHT: u16 = 32;

pub fn create_test_state(now: Instant) -> AppState {
    let problems = fixtures::sample_problem_set();
    let problem = fixtures::print_numbers();
    AppState::new(problems, problem, WorkspaceState::default(), now)
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

/// Draws one frame and stores its geometry, like the effect runner does.
pub fn render_to_string(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    now: Instant,
) -> String {
    terminal
        .draw(|frame| {
            let output = MainLayout::render(frame, state, now);
            state.ui.geometry = output.geometry;
        })
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// Routes a terminal event through the handler and reducer, dropping effects
/// other than render.
pub fn dispatch(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    event: Event,
    now: Instant,
) -> Action {
    let action = handle_event(event, state);
    apply(terminal, state, action.clone(), now);
    action
}

/// Maps every event against the same state before reducing any of them.
/// The app loop queues mapped actions, so a burst of terminal events can
/// all be mapped before the first resulting action is reduced.
pub fn dispatch_queued(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    events: Vec<Event>,
    now: Instant,
) -> Vec<Action> {
    let actions: Vec<Action> = events
        .into_iter()
        .map(|event| handle_event(event, state))
        .collect();
    for action in &actions {
        apply(terminal, state, action.clone(), now);
    }
    actions
}

pub fn apply(
    terminal: &mut Terminal<TestBackend>,
    state: &mut AppState,
    action: Action,
    now: Instant,
) -> Vec<Effect> {
    let effects = reduce(state, action, now);
    if state.render_dirty {
        render_to_string(terminal, state, now);
        state.clear_dirty();
    }
    effects
}

pub fn describe(rect: Option<Rect>) -> String {
    rect.map_or_else(
        || "hidden".to_string(),
        |r| format!("{},{} {}x{}", r.x, r.y, r.width, r.height),
    )
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
