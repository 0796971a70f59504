use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::molecules::{chip_hint_line, render_modal};
use crate::app::keybindings::{
    GLOBAL_KEYS, INSERT_KEYS, KeyBinding, LAYOUT_KEYS, PANE_KEYS, idx,
};
use crate::ui::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let inner = render_modal(
            frame,
            Constraint::Percentage(70),
            Constraint::Percentage(80),
            " Help ",
            " ? / Esc to close ",
        );

        let mut lines = Vec::new();
        // Restore shares the fullscreen key; list it once
        let global = GLOBAL_KEYS
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx::global::EXIT_FULLSCREEN)
            .map(|(_, kb)| kb);
        Self::push_section(&mut lines, "Global", global);
        Self::push_section(&mut lines, "Layout", LAYOUT_KEYS.iter());
        Self::push_section(&mut lines, "Panes", PANE_KEYS.iter());
        Self::push_section(&mut lines, "Editor (Insert mode)", INSERT_KEYS.iter());

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn push_section<'a>(
        lines: &mut Vec<Line<'static>>,
        title: &str,
        keys: impl Iterator<Item = &'a KeyBinding>,
    ) {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("=== {title} ==="),
            Style::default()
                .fg(Theme::SECTION_HEADER)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(keys.map(|kb| chip_hint_line(kb.key, kb.description)));
    }
}
