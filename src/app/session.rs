//! Per-problem UI state: tab, sample testcase, code buffer, timer.

use std::time::{Duration, Instant};

use super::code_buffer::CodeBuffer;
use super::problem_tab::ProblemTab;
use crate::domain::Problem;

#[derive(Debug, Clone)]
pub struct ProblemSession {
    pub problem: Problem,
    pub code: CodeBuffer,
    pub active_tab: ProblemTab,
    /// Always an id from `problem.sample_test_cases` (empty if it has none)
    active_test_case: String,
    pub started_at: Instant,
}

impl ProblemSession {
    pub fn new(problem: Problem, now: Instant) -> Self {
        let code = CodeBuffer::seeded(&problem.starter_code);
        let active_test_case = problem.first_test_case_id().unwrap_or_default().to_string();
        Self {
            problem,
            code,
            active_tab: ProblemTab::default(),
            active_test_case,
            started_at: now,
        }
    }

    pub fn active_test_case(&self) -> &str {
        &self.active_test_case
    }

    /// Unknown ids are ignored. Returns true when the id exists.
    pub fn select_test_case(&mut self, id: &str) -> bool {
        if !self.problem.has_test_case(id) {
            return false;
        }
        if self.active_test_case != id {
            self.active_test_case = id.to_string();
        }
        true
    }

    fn step_test_case(&mut self, forward: bool) {
        let cases = &self.problem.sample_test_cases;
        if cases.is_empty() {
            return;
        }
        let current = self.problem.test_case_index(&self.active_test_case).unwrap_or(0);
        let next = if forward {
            (current + 1) % cases.len()
        } else {
            (current + cases.len() - 1) % cases.len()
        };
        self.active_test_case = cases[next].id.clone();
    }

    pub fn next_test_case(&mut self) {
        self.step_test_case(true);
    }

    pub fn prev_test_case(&mut self) {
        self.step_test_case(false);
    }

    pub fn reset_code(&mut self) {
        self.code = CodeBuffer::seeded(&self.problem.starter_code);
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

/// `HH:MM:SS`, hours not wrapped at 24
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
