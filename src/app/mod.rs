pub mod action;
pub mod code_buffer;
pub mod drag;
pub mod effect;
pub mod effect_runner;
pub mod execution;
pub mod focused_pane;
pub mod input_mode;
pub mod keybindings;
pub mod layout;
pub mod message_state;
pub mod ports;
pub mod problem_tab;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod session;
pub mod split;
pub mod state;
pub mod ui_state;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;
