use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::atoms::panel_block;
use super::strip::{below_strip, render_chip_strip};
use crate::app::focused_pane::FocusedPane;
use crate::app::layout::{fullscreen_badge, pane_inner, strip_row};
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;
use crate::domain::SampleTestCase;
use crate::ui::theme::Theme;

pub struct TestCasePane;

impl TestCasePane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.ui.focused_pane == FocusedPane::TestCases;
        let badge = fullscreen_badge(state.workspace.is_fullscreen(FullscreenPane::Bottom));
        frame.render_widget(panel_block(" 3 Testcase ", badge, focused), area);

        let problem = state.current_problem();
        let labels: Vec<String> = (1..=problem.sample_test_cases.len())
            .map(|i| format!("Case {i}"))
            .collect();
        let active = problem.test_case_index(state.session.active_test_case());
        render_chip_strip(frame, strip_row(area), &labels, active);

        let body = below_strip(pane_inner(area));
        let lines = match problem.test_case(state.session.active_test_case()) {
            Some(case) => case_lines(case),
            None => vec![Line::from(Span::styled(
                "No sample testcases",
                Style::default().fg(Theme::TEXT_MUTED),
            ))],
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
    }
}

fn case_lines(case: &SampleTestCase) -> Vec<Line<'static>> {
    let label = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Theme::TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let mut lines = vec![label("Input")];
    lines.extend(case.input.lines().map(|l| Line::from(format!("  {l}"))));
    lines.push(Line::default());
    lines.push(label("Expected Output"));
    lines.extend(
        case.expected_output
            .lines()
            .map(|l| Line::from(format!("  {l}"))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_lines_show_input_then_expected() {
        let case = SampleTestCase {
            id: "2".to_string(),
            input: "10".to_string(),
            expected_output: "1 2 3 4 5 6 7 8 9 10".to_string(),
            explanation: None,
        };

        let text: Vec<String> = case_lines(&case)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert_eq!(
            text,
            vec!["Input", "  10", "", "Expected Output", "  1 2 3 4 5 6 7 8 9 10"]
        );
    }
}
