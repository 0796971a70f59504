//! Code editor sub-reducer. Buffer edits apply only in Insert mode.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::focused_pane::FocusedPane;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

fn is_editing(state: &AppState) -> bool {
    state.ui.input_mode == InputMode::Insert
}

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_editor(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::EnterInsertMode => {
            state.ui.focused_pane = FocusedPane::Editor;
            state.ui.input_mode = InputMode::Insert;
            Some(vec![])
        }
        Action::ExitInsertMode => {
            if is_editing(state) {
                state.ui.input_mode = InputMode::Normal;
            }
            Some(vec![])
        }
        Action::EditorInput(c) => {
            if is_editing(state) {
                state.session.code.insert(*c);
            }
            Some(vec![])
        }
        Action::EditorNewLine => {
            if is_editing(state) {
                state.session.code.insert('\n');
            }
            Some(vec![])
        }
        Action::EditorTab => {
            if is_editing(state) {
                state.session.code.insert_tab();
            }
            Some(vec![])
        }
        Action::EditorBackspace => {
            if is_editing(state) {
                state.session.code.backspace();
            }
            Some(vec![])
        }
        Action::EditorDelete => {
            if is_editing(state) {
                state.session.code.delete();
            }
            Some(vec![])
        }
        Action::EditorMoveCursor(movement) => {
            if is_editing(state) {
                state.session.code.move_cursor(*movement);
            }
            Some(vec![])
        }
        Action::EditorPaste(text) => {
            if is_editing(state) {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                state.session.code.insert_str(&normalized);
            }
            Some(vec![])
        }
        Action::ResetCode => {
            state.session.reset_code();
            state.messages.success("Code reset to starter template", now);
            Some(vec![])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::code_buffer::CursorMove;
    use crate::app::test_support::sample_state;

    fn reduce(state: &mut AppState, action: Action) {
        reduce_editor(state, &action, Instant::now());
    }

    #[test]
    fn typing_in_normal_mode_does_nothing() {
        let mut state = sample_state(Instant::now());

        reduce(&mut state, Action::EditorInput('x'));

        assert_eq!(state.session.code.content(), "# Write your code here\n\n");
    }

    #[test]
    fn insert_mode_focuses_editor_and_accepts_input() {
        let mut state = sample_state(Instant::now());

        reduce(&mut state, Action::EnterInsertMode);
        for c in "print(1)".chars() {
            reduce(&mut state, Action::EditorInput(c));
        }

        assert_eq!(state.ui.focused_pane, FocusedPane::Editor);
        assert!(state.session.code.content().ends_with("\n\nprint(1)"));
    }

    #[test]
    fn backspace_and_cursor_moves_edit_in_place() {
        let mut state = sample_state(Instant::now());
        reduce(&mut state, Action::EnterInsertMode);
        reduce(&mut state, Action::EditorInput('a'));
        reduce(&mut state, Action::EditorInput('c'));
        reduce(&mut state, Action::EditorMoveCursor(CursorMove::Left));
        reduce(&mut state, Action::EditorInput('b'));
        reduce(&mut state, Action::EditorMoveCursor(CursorMove::End));
        reduce(&mut state, Action::EditorBackspace);

        assert!(state.session.code.content().ends_with("\n\nab"));
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut state = sample_state(Instant::now());
        reduce(&mut state, Action::EnterInsertMode);

        reduce(&mut state, Action::EditorPaste("a\r\nb\rc".to_string()));

        assert!(state.session.code.content().ends_with("a\nb\nc"));
    }

    #[test]
    fn reset_restores_starter_code_with_message() {
        let mut state = sample_state(Instant::now());
        reduce(&mut state, Action::EnterInsertMode);
        reduce(&mut state, Action::EditorInput('x'));

        reduce(&mut state, Action::ResetCode);

        assert_eq!(state.session.code.content(), "# Write your code here\n\n");
        assert!(state.messages.current.is_some());
    }

    #[test]
    fn exit_insert_returns_to_normal() {
        let mut state = sample_state(Instant::now());
        reduce(&mut state, Action::EnterInsertMode);

        reduce(&mut state, Action::ExitInsertMode);

        assert_eq!(state.ui.input_mode, InputMode::Normal);
    }
}
