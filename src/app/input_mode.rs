#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes go to the code buffer
    Insert,
    Help,
}
