use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::drag::CursorHint;
use crate::app::split::Axis;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct Divider;

impl Divider {
    /// The divider under drag lights up, standing in for a resize cursor.
    pub fn render(frame: &mut Frame, area: Rect, axis: Axis, state: &AppState) {
        let active = state.workspace.cursor_hint() == CursorHint::for_axis(axis);
        let color = if active {
            Theme::DIVIDER_ACTIVE
        } else {
            Theme::DIVIDER
        };

        let lines: Vec<Line> = match axis {
            Axis::Horizontal => (0..area.height).map(|_| Line::from("│")).collect(),
            Axis::Vertical => vec![Line::from("─".repeat(usize::from(area.width)))],
        };
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(color)),
            area,
        );
    }
}
