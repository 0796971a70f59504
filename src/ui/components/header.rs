use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::text_utils::truncate_to_width;
use crate::app::layout::BACK_LABEL_WIDTH;
use crate::app::session::format_elapsed;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

const BACK_LABEL: &str = "← Back";
const SEPARATOR: &str = " │ ";

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let problem = state.current_problem();
        let timer = format_elapsed(state.session.elapsed(now));
        let level = format!("Level {}", problem.level);

        // Track title absorbs whatever width the fixed parts leave
        let fixed = usize::from(BACK_LABEL_WIDTH)
            + SEPARATOR.width() * 2
            + problem.category.width()
            + level.width()
            + timer.width()
            + 1;
        let title_width = usize::from(area.width).saturating_sub(fixed);

        let line = Line::from(vec![
            Span::styled(
                format!("{BACK_LABEL:<width$}", width = usize::from(BACK_LABEL_WIDTH)),
                Style::default().fg(Theme::TEXT_ACCENT),
            ),
            Span::styled(
                truncate_to_width(&state.problems.track_title, title_width),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(SEPARATOR, Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(
                problem.category.clone(),
                Style::default().fg(Theme::SECTION_HEADER),
            ),
            Span::styled(SEPARATOR, Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(level, Style::default().fg(Theme::TEXT_SECONDARY)),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let timer_line = Line::from(Span::styled(
            timer,
            Style::default().fg(Theme::TEXT_ACCENT),
        ))
        .right_aligned();
        frame.render_widget(Paragraph::new(timer_line), area);
    }
}
