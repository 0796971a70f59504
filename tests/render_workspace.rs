mod harness;

use std::time::{Duration, Instant};

use harness::{create_test_state, create_test_terminal, describe, render_to_string};

use codepane::app::action::Action;
use codepane::app::execution::ExecutionKind;
use codepane::app::focused_pane::FocusedPane;
use codepane::app::input_mode::InputMode;
use codepane::app::problem_tab::ProblemTab;
use codepane::app::reducer::reduce;
use codepane::app::workspace::FullscreenPane;

#[test]
fn initial_frame_shows_header_panes_and_controls() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("← Back"));
    assert!(output.contains("Problem Solving in Python"));
    assert!(output.contains("Looping"));
    assert!(output.contains("Level 1"));
    assert!(output.contains("00:00:00"));
    assert!(output.contains("3. Print Numbers from 1 to N"));
    assert!(output.contains("Problem Statement"));
    assert!(output.contains("# Write your code here"));
    assert!(output.contains(" Case 1 "));
    assert!(output.contains(" Case 3 "));
    assert!(output.contains("Python"));
    assert!(output.contains("▶ Run"));
    assert!(output.contains("Submit"));
}

#[test]
fn default_split_geometry() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();

    render_to_string(&mut terminal, &mut state, now);
    let geometry = state.ui.geometry;

    insta::assert_snapshot!(describe(geometry.description), @"0,1 50x29");
    insta::assert_snapshot!(describe(geometry.horizontal_divider), @"50,1 1x29");
    insta::assert_snapshot!(describe(geometry.editor), @"51,1 50x20");
    insta::assert_snapshot!(describe(geometry.vertical_divider), @"51,21 50x1");
    insta::assert_snapshot!(describe(geometry.test_cases), @"51,22 50x8");
    insta::assert_snapshot!(describe(geometry.navigator), @"101,1 6x29");
}

#[test]
fn timer_advances_with_render_time() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &mut state, now + Duration::from_secs(3_725));

    assert!(output.contains("01:02:05"));
}

#[test]
fn left_fullscreen_hides_editor_testcases_and_dividers() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::ToggleFullscreen(FullscreenPane::Left), now);

    let output = render_to_string(&mut terminal, &mut state, now);
    let geometry = state.ui.geometry;

    assert!(!output.contains("Testcase"));
    assert!(!output.contains("# Write your code here"));
    insta::assert_snapshot!(describe(geometry.description), @"0,1 107x29");
    insta::assert_snapshot!(describe(geometry.horizontal_divider), @"hidden");
    insta::assert_snapshot!(describe(geometry.vertical_divider), @"hidden");
}

#[test]
fn right_fullscreen_keeps_editor_and_testcases_stacked() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::ToggleFullscreen(FullscreenPane::Right), now);

    let output = render_to_string(&mut terminal, &mut state, now);
    let geometry = state.ui.geometry;

    assert!(!output.contains("Problem Statement"));
    assert!(output.contains("Testcase"));
    insta::assert_snapshot!(describe(geometry.editor), @"0,1 107x20");
    insta::assert_snapshot!(describe(geometry.test_cases), @"0,21 107x9");
}

#[test]
fn pending_run_shows_spinner_label() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::StartExecution(ExecutionKind::Run), now);

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("Running..."));
    assert!(!output.contains("▶ Run"));
    assert!(output.contains("Submit"));
}

#[test]
fn test_result_tab_shows_placeholder() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::SelectTab(ProblemTab::TestResult), now);

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("Run your code to see test results"));
    assert!(!output.contains("Problem Statement"));
}

#[test]
fn selected_case_shows_its_expected_output() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::SelectTestCase("2".to_string()), now);

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("1 2 3 4 5 6 7 8 9 10"));
}

#[test]
fn insert_mode_marks_editor_title() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::EnterInsertMode, now);

    let output = render_to_string(&mut terminal, &mut state, now);

    assert_eq!(state.ui.focused_pane, FocusedPane::Editor);
    assert!(output.contains("INSERT"));
}

#[test]
fn help_overlay_lists_layout_keys() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    state.ui.input_mode = InputMode::Help;

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("=== Layout ==="));
    assert!(output.contains("Mouse drag"));
}

#[test]
fn error_message_replaces_footer_hints() {
    let now = Instant::now();
    let mut state = create_test_state(now);
    let mut terminal = create_test_terminal();
    reduce(&mut state, Action::NavigateToProblem(42), now);

    let output = render_to_string(&mut terminal, &mut state, now);

    assert!(output.contains("Problem 42 not found"));
}
