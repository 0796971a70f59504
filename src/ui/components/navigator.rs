use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::state::AppState;
use crate::ui::theme::Theme;

/// One problem number per row; row `i` is `problems()[i]`, matching the hit test.
pub struct Navigator;

impl Navigator {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let current = state.current_problem().number;
        let width = usize::from(area.width);

        let lines: Vec<Line> = state
            .problems
            .problems()
            .iter()
            .take(usize::from(area.height))
            .map(|p| {
                let style = if p.number == current {
                    Style::default()
                        .fg(Theme::CHIP_ACTIVE_FG)
                        .bg(Theme::CHIP_ACTIVE_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Theme::TEXT_SECONDARY)
                };
                Line::from(Span::styled(format!("{:^width$}", p.number), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
