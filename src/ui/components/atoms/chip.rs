use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::ui::theme::Theme;

/// Tab or testcase chip: ` label ` with a filled background when active.
pub fn label_chip(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .bg(Theme::CHIP_ACTIVE_BG)
            .fg(Theme::CHIP_ACTIVE_FG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::TEXT_SECONDARY)
    };
    Span::styled(format!(" {label} "), style)
}
