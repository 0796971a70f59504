use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::atoms::panel_block;
use super::strip::{below_strip, render_chip_strip};
use crate::app::focused_pane::FocusedPane;
use crate::app::layout::{fullscreen_badge, pane_inner, strip_row};
use crate::app::problem_tab::ProblemTab;
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;
use crate::domain::Problem;
use crate::ui::theme::Theme;

const NO_RESULTS: &str = "Run your code to see test results";

pub struct DescriptionPane;

impl DescriptionPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.ui.focused_pane == FocusedPane::Description;
        let badge = fullscreen_badge(state.workspace.is_fullscreen(FullscreenPane::Left));
        frame.render_widget(panel_block(" 1 Problem ", badge, focused), area);

        let tabs: Vec<String> = ProblemTab::all()
            .iter()
            .map(|t| t.display_name().to_string())
            .collect();
        let active = ProblemTab::all()
            .iter()
            .position(|t| *t == state.session.active_tab);
        render_chip_strip(frame, strip_row(area), &tabs, active);

        let body = below_strip(pane_inner(area));
        let lines = match state.session.active_tab {
            ProblemTab::Description => Self::description_lines(state.current_problem()),
            ProblemTab::TestResult => vec![Line::from(Span::styled(
                NO_RESULTS,
                Style::default().fg(Theme::TEXT_MUTED),
            ))],
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
    }

    fn description_lines(problem: &Problem) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                problem.heading(),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];

        push_section(&mut lines, "Problem Statement", &problem.description);
        push_section(&mut lines, "Input Format", &problem.input_format);
        push_section(&mut lines, "Output Format", &problem.output_format);

        if !problem.constraints.is_empty() {
            lines.push(section_header("Constraints"));
            lines.extend(
                problem
                    .constraints
                    .iter()
                    .map(|c| Line::from(format!("  • {c}"))),
            );
            lines.push(Line::default());
        }

        if let Some(sample) = problem.sample_test_cases.first() {
            lines.push(section_header("Sample 1"));
            lines.push(labelled("Input: ", &sample.input));
            lines.push(labelled("Output: ", &sample.expected_output));
            if let Some(explanation) = &sample.explanation {
                lines.push(Line::default());
                push_section(&mut lines, "Explanation", explanation);
            }
        }

        lines
    }
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Theme::SECTION_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, body: &str) {
    lines.push(section_header(title));
    lines.extend(body.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::default());
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), Style::default().fg(Theme::TEXT_SECONDARY)),
        Span::raw(value.to_string()),
    ])
}
