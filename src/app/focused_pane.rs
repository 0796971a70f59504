use super::workspace::FullscreenPane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    #[default]
    Description,
    Editor,
    TestCases,
}

impl FocusedPane {
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Description),
            '2' => Some(Self::Editor),
            '3' => Some(Self::TestCases),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Editor,
            Self::Editor => Self::TestCases,
            Self::TestCases => Self::Description,
        }
    }

    /// The editor's maximize button covers the whole right column.
    pub fn fullscreen_target(self) -> FullscreenPane {
        match self {
            Self::Description => FullscreenPane::Left,
            Self::Editor => FullscreenPane::Right,
            Self::TestCases => FullscreenPane::Bottom,
        }
    }
}
