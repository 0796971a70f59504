#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProblemTab {
    #[default]
    Description,
    TestResult,
}

impl ProblemTab {
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::TestResult,
            Self::TestResult => Self::Description,
        }
    }

    pub fn prev(self) -> Self {
        // Two tabs: prev and next coincide
        self.next()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::TestResult => "Test Result",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Description, Self::TestResult]
    }
}
