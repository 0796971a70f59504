use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::app::action::Action;
use crate::app::code_buffer::CursorMove;
use crate::app::execution::ExecutionKind;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::layout::{
    BACK_LABEL_WIDTH, HitRegion, chip_rects, control_button_rects, fullscreen_badge,
    rect_contains, strip_row, title_badge_rect,
};
use crate::app::problem_tab::ProblemTab;
use crate::app::split::Axis;
use crate::app::state::AppState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
        Event::Paste(text) => match state.ui.input_mode {
            InputMode::Insert => Action::EditorPaste(text),
            _ => Action::None,
        },
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key, state),
        InputMode::Insert => handle_insert_mode(key),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent, state: &AppState) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('b') => Action::NavigateBack,
        KeyCode::Esc => Action::Escape,

        // Focus
        KeyCode::Char(c @ '1'..='3') => {
            FocusedPane::from_key(c).map_or(Action::None, Action::SetFocusedPane)
        }
        KeyCode::Tab => Action::CycleFocus,
        KeyCode::Char('f') => Action::ToggleFocusedFullscreen,

        // Pane sizes
        KeyCode::Char('>') => Action::GrowPane(Axis::Horizontal),
        KeyCode::Char('<') => Action::ShrinkPane(Axis::Horizontal),
        KeyCode::Char('+' | '=') => Action::GrowPane(Axis::Vertical),
        KeyCode::Char('-') => Action::ShrinkPane(Axis::Vertical),

        // Tabs and sample testcases
        KeyCode::Char('[') => Action::PrevTab,
        KeyCode::Char(']') => Action::NextTab,
        KeyCode::Char('h') | KeyCode::Left => Action::PrevTestCase,
        KeyCode::Char('l') | KeyCode::Right => Action::NextTestCase,

        // Editor and execution
        KeyCode::Char('i') => Action::EnterInsertMode,
        KeyCode::Enter if state.ui.focused_pane == FocusedPane::Editor => {
            Action::EnterInsertMode
        }
        KeyCode::Char('r') => Action::StartExecution(ExecutionKind::Run),
        KeyCode::Char('s') => Action::StartExecution(ExecutionKind::Submit),
        KeyCode::Char('R') => Action::ResetCode,

        // Problem navigator
        KeyCode::Char('n') => Action::NextProblem,
        KeyCode::Char('p') => Action::PrevProblem,

        _ => Action::None,
    }
}

fn handle_insert_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => {
            Action::StartExecution(ExecutionKind::Run)
        }
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            Action::StartExecution(ExecutionKind::Submit)
        }
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => Action::None,
        (KeyCode::Esc, _) => Action::ExitInsertMode,
        (KeyCode::Left, _) => Action::EditorMoveCursor(CursorMove::Left),
        (KeyCode::Right, _) => Action::EditorMoveCursor(CursorMove::Right),
        (KeyCode::Up, _) => Action::EditorMoveCursor(CursorMove::Up),
        (KeyCode::Down, _) => Action::EditorMoveCursor(CursorMove::Down),
        (KeyCode::Home, _) => Action::EditorMoveCursor(CursorMove::Home),
        (KeyCode::End, _) => Action::EditorMoveCursor(CursorMove::End),
        (KeyCode::Enter, _) => Action::EditorNewLine,
        (KeyCode::Tab, _) => Action::EditorTab,
        (KeyCode::Backspace, _) => Action::EditorBackspace,
        (KeyCode::Delete, _) => Action::EditorDelete,
        (KeyCode::Char(c), _) => Action::EditorInput(c),
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        _ => Action::None,
    }
}

/// Drags and releases always go to the drag session, wherever the pointer
/// is. They are mapped without looking at the capture, because a queued
/// `BeginDrag` may not be reduced yet; the reducer ignores them when no
/// session is active.
fn handle_mouse_event(mouse: MouseEvent, state: &AppState) -> Action {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Drag(MouseButton::Left) => Action::DragMove { x, y },
        MouseEventKind::Up(MouseButton::Left) => Action::EndDrag,
        MouseEventKind::Down(MouseButton::Left) => {
            let click = handle_press(x, y, state);
            if state.workspace.capture().is_captured() {
                Action::CancelDragThen(Box::new(click))
            } else {
                click
            }
        }
        _ => Action::None,
    }
}

fn handle_press(x: u16, y: u16, state: &AppState) -> Action {
    if state.ui.input_mode == InputMode::Help {
        return Action::CloseHelp;
    }

    let geometry = &state.ui.geometry;
    match geometry.hit_test(x, y) {
        HitRegion::Divider(axis) => Action::BeginDrag { axis, x, y },
        HitRegion::Navigator(row) => state
            .problems
            .problems()
            .get(row)
            .map_or(Action::None, |p| Action::NavigateToProblem(p.number)),
        HitRegion::Description => {
            pane_click(state, geometry.description, FocusedPane::Description, x, y, |pane| {
                tab_at(pane, x, y).map(Action::SelectTab)
            })
        }
        HitRegion::TestCases => {
            pane_click(state, geometry.test_cases, FocusedPane::TestCases, x, y, |pane| {
                test_case_at(state, pane, x, y).map(Action::SelectTestCase)
            })
        }
        HitRegion::Editor => pane_click(state, geometry.editor, FocusedPane::Editor, x, y, |_| None),
        HitRegion::Outside => outside_click(state, x, y),
    }
}

/// Badge first, then the pane's chip strip, otherwise a plain focus click.
fn pane_click(
    state: &AppState,
    pane: Option<Rect>,
    focus: FocusedPane,
    x: u16,
    y: u16,
    strip: impl FnOnce(Rect) -> Option<Action>,
) -> Action {
    let Some(pane) = pane else {
        return Action::SetFocusedPane(focus);
    };
    let target = focus.fullscreen_target();
    let badge = fullscreen_badge(state.workspace.is_fullscreen(target));
    if rect_contains(title_badge_rect(pane, badge.width() as u16), x, y) {
        return Action::ToggleFullscreen(target);
    }
    strip(pane).unwrap_or(Action::SetFocusedPane(focus))
}

fn tab_at(pane: Rect, x: u16, y: u16) -> Option<ProblemTab> {
    let widths: Vec<u16> = ProblemTab::all()
        .iter()
        .map(|tab| tab.display_name().width() as u16)
        .collect();
    chip_rects(strip_row(pane), &widths)
        .into_iter()
        .zip(ProblemTab::all())
        .find(|(rect, _)| rect_contains(*rect, x, y))
        .map(|(_, tab)| *tab)
}

fn test_case_at(state: &AppState, pane: Rect, x: u16, y: u16) -> Option<String> {
    let cases = &state.session.problem.sample_test_cases;
    let widths: Vec<u16> = (1..=cases.len())
        .map(|i| format!("Case {i}").width() as u16)
        .collect();
    chip_rects(strip_row(pane), &widths)
        .into_iter()
        .zip(cases)
        .find(|(rect, _)| rect_contains(*rect, x, y))
        .map(|(_, case)| case.id.clone())
}

fn outside_click(state: &AppState, x: u16, y: u16) -> Action {
    let geometry = &state.ui.geometry;
    if rect_contains(geometry.header, x, y) && x < geometry.header.x + BACK_LABEL_WIDTH {
        return Action::NavigateBack;
    }
    if rect_contains(geometry.controls, x, y) {
        return control_button_rects(geometry.controls)
            .into_iter()
            .find(|(_, rect)| rect_contains(*rect, x, y))
            .map_or(Action::None, |(kind, _)| Action::StartExecution(kind));
    }
    Action::None
}
