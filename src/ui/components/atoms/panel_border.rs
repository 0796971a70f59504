use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::Theme;

/// Creates a panel block with focus-aware border styling. `badge` is drawn
/// at the right end of the top border (e.g. the fullscreen key).
pub fn panel_block(title: &str, badge: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Theme::FOCUS_BORDER)
    } else {
        Style::default().fg(Theme::UNFOCUS_BORDER)
    };

    let mut block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    if !badge.is_empty() {
        block = block.title(Line::from(badge.to_string()).right_aligned());
    }
    block
}
