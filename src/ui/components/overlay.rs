use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::ui::theme::Theme;

/// Creates a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Rounded modal block with a title on top and a key hint on the bottom edge.
pub fn modal_block_with_hint(title: String, hint: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_bottom(Line::from(hint).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Theme::FOCUS_BORDER))
        .style(Style::default().bg(Theme::MODAL_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 100, 40);

        let rect = centered_rect(area, Constraint::Length(20), Constraint::Length(10));

        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }
}
