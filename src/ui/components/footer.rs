use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{
    GLOBAL_KEYS, HELP_KEYS, INSERT_KEYS, LAYOUT_KEYS, PANE_KEYS, idx,
};
use crate::app::message_state::MessageKind;
use crate::app::state::AppState;
use crate::app::workspace::FullscreenPane;
use crate::ui::theme::Theme;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let hints = Self::get_context_hints(state);
        let line = match &state.messages.current {
            Some(msg) if msg.kind == MessageKind::Error => Line::from(Span::styled(
                msg.text.clone(),
                Style::default().fg(Theme::STATUS_ERROR),
            )),
            Some(msg) => Self::build_hint_line_with_success(&hints, Some(&msg.text)),
            None => Self::build_hint_line_with_success(&hints, None),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    /// Hint ordering: Actions → Navigation → Help → Close/Cancel → Quit
    fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui.input_mode {
            InputMode::Normal => {
                let mut list = vec![
                    GLOBAL_KEYS[idx::global::RUN].as_hint(),
                    GLOBAL_KEYS[idx::global::SUBMIT].as_hint(),
                ];
                match state.ui.focused_pane {
                    FocusedPane::Description => {
                        list.push(PANE_KEYS[idx::panes::TABS].as_hint());
                    }
                    FocusedPane::Editor => {
                        list.push(GLOBAL_KEYS[idx::global::EDIT].as_hint());
                        list.push(GLOBAL_KEYS[idx::global::RESET_CODE].as_hint());
                    }
                    FocusedPane::TestCases => {
                        list.push(PANE_KEYS[idx::panes::CASES].as_hint());
                    }
                }
                if state.workspace.fullscreen() == FullscreenPane::None {
                    list.push(GLOBAL_KEYS[idx::global::FULLSCREEN].as_hint());
                    list.push(LAYOUT_KEYS[idx::layout::WIDEN_LEFT].as_hint());
                    list.push(LAYOUT_KEYS[idx::layout::NARROW_LEFT].as_hint());
                } else {
                    list.push(GLOBAL_KEYS[idx::global::EXIT_FULLSCREEN].as_hint());
                }
                list.push(GLOBAL_KEYS[idx::global::PANE_SWITCH].as_hint());
                list.push(GLOBAL_KEYS[idx::global::PROBLEM_NAV].as_hint());
                list.push(GLOBAL_KEYS[idx::global::HELP].as_hint());
                list.push(GLOBAL_KEYS[idx::global::BACK].as_hint());
                list.push(GLOBAL_KEYS[idx::global::QUIT].as_hint());
                list
            }
            InputMode::Insert => vec![
                INSERT_KEYS[idx::insert::RUN].as_hint(),
                INSERT_KEYS[idx::insert::SUBMIT].as_hint(),
                INSERT_KEYS[idx::insert::MOVE].as_hint(),
                INSERT_KEYS[idx::insert::ESC_NORMAL].as_hint(),
            ],
            InputMode::Help => vec![
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }

    fn build_hint_line_with_success(
        hints: &[(&str, &str)],
        success_msg: Option<&str>,
    ) -> Line<'static> {
        let mut spans = Vec::new();

        if let Some(msg) = success_msg {
            spans.push(Span::styled(
                format!("✓ {msg}  "),
                Style::default().fg(Theme::STATUS_SUCCESS),
            ));
        }
        spans.extend(hint_line(hints).spans);

        Line::from(spans)
    }
}
