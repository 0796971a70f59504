use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::atoms::spinner_char;
use crate::app::execution::{ExecutionKind, ExecutionSlot};
use crate::app::layout::control_button_rects;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

/// Only language the workspace offers
const LANGUAGE_LABEL: &str = "Python";

pub struct ControlsBar;

impl ControlsBar {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState, now: Instant) {
        let language = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {LANGUAGE_LABEL} ▾ "),
                Style::default()
                    .fg(Theme::TEXT_PRIMARY)
                    .bg(Theme::CHIP_ACTIVE_BG),
            ),
        ]);
        frame.render_widget(Paragraph::new(language), area);

        for (kind, rect) in control_button_rects(area) {
            let slot = state.execution.slot(kind);
            frame.render_widget(
                Paragraph::new(Self::button_label(kind, slot, now))
                    .style(Self::button_style(kind, slot))
                    .centered(),
                rect,
            );
        }
    }

    fn button_label(kind: ExecutionKind, slot: &ExecutionSlot, now: Instant) -> String {
        match slot.started_at.filter(|_| slot.is_pending()) {
            Some(started_at) => {
                let elapsed_ms = now.saturating_duration_since(started_at).as_millis();
                format!("{} {}", spinner_char(elapsed_ms), kind.pending_label())
            }
            None => match kind {
                ExecutionKind::Run => format!("▶ {}", kind.idle_label()),
                ExecutionKind::Submit => kind.idle_label().to_string(),
            },
        }
    }

    fn button_style(kind: ExecutionKind, slot: &ExecutionSlot) -> Style {
        if !slot.is_enabled() {
            return Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BUTTON_DISABLED);
        }
        let bg = match kind {
            ExecutionKind::Run => Theme::RUN_BUTTON,
            ExecutionKind::Submit => Theme::SUBMIT_BUTTON,
        };
        Style::default()
            .fg(Theme::TEXT_PRIMARY)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_run_shows_play_label() {
        let slot = ExecutionSlot::default();

        assert_eq!(
            ControlsBar::button_label(ExecutionKind::Run, &slot, Instant::now()),
            "▶ Run"
        );
    }

    #[test]
    fn pending_submit_shows_spinner_and_pending_label() {
        let now = Instant::now();
        let mut slot = ExecutionSlot::default();
        slot.start(now);

        assert_eq!(
            ControlsBar::button_label(ExecutionKind::Submit, &slot, now),
            "⠋ Submitting..."
        );
    }

    #[test]
    fn pending_button_is_greyed_out() {
        let mut slot = ExecutionSlot::default();
        slot.start(Instant::now());

        let style = ControlsBar::button_style(ExecutionKind::Run, &slot);

        assert_eq!(style.bg, Some(Theme::BUTTON_DISABLED));
    }
}
