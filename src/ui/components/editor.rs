use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::panel_block;
use super::text_utils::clip_to_width;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::layout::{fullscreen_badge, pane_inner};
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;
use crate::ui::theme::Theme;

const CURSOR_BLINK: Duration = Duration::from_millis(500);
const GUTTER_WIDTH: usize = 4;

pub struct EditorPane;

impl EditorPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let focused = state.ui.focused_pane == FocusedPane::Editor;
        let inserting = state.ui.input_mode == InputMode::Insert;
        let title = if inserting {
            " 2 Code · INSERT "
        } else {
            " 2 Code "
        };
        let badge = fullscreen_badge(state.workspace.is_fullscreen(FullscreenPane::Right));
        frame.render_widget(panel_block(title, badge, focused), area);

        let inner = pane_inner(area);
        if inner.height == 0 {
            return;
        }

        let code = &state.session.code;
        let (cursor_line, cursor_col) = code.cursor_position();
        let cursor = (inserting && cursor_visible(state.session.started_at, now))
            .then_some((cursor_line, cursor_col));
        let scroll = cursor_line.saturating_sub(usize::from(inner.height) - 1);
        let text_width = usize::from(inner.width).saturating_sub(GUTTER_WIDTH);

        let lines: Vec<Line> = code
            .content()
            .split('\n')
            .enumerate()
            .skip(scroll)
            .take(usize::from(inner.height))
            .map(|(i, text)| {
                let cursor_col = cursor.filter(|(l, _)| *l == i).map(|(_, c)| c);
                code_line(i + 1, text, cursor_col, text_width)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Cursor blinks relative to the session start so every render agrees.
fn cursor_visible(started_at: Instant, now: Instant) -> bool {
    let elapsed = now.saturating_duration_since(started_at).as_millis();
    (elapsed / CURSOR_BLINK.as_millis()) % 2 == 0
}

fn code_line(number: usize, text: &str, cursor_col: Option<usize>, width: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{number:>3} "),
        Style::default().fg(Theme::LINE_NUMBER),
    )];

    let Some(col) = cursor_col else {
        spans.push(Span::raw(clip_to_width(text, width).to_string()));
        return Line::from(spans);
    };

    let before: String = text.chars().take(col).collect();
    let under = text.chars().nth(col).unwrap_or(' ');
    let after: String = text.chars().skip(col + 1).collect();
    spans.push(Span::raw(before));
    spans.push(Span::styled(
        under.to_string(),
        Style::default()
            .bg(Theme::CURSOR_BG)
            .fg(Theme::CURSOR_FG)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(after));
    Line::from(spans)
}
