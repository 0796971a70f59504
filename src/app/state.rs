use std::time::Instant;

use super::execution::ExecutionState;
use super::message_state::MessageState;
use super::session::ProblemSession;
use super::ui_state::UiState;
use super::workspace::WorkspaceState;
use crate::domain::{Problem, ProblemSet};

pub struct AppState {
    pub should_quit: bool,
    pub problems: ProblemSet,
    pub session: ProblemSession,
    pub workspace: WorkspaceState,
    pub execution: ExecutionState,
    pub ui: UiState,
    pub messages: MessageState,

    pub render_dirty: bool,
}

impl AppState {
    pub fn new(
        problems: ProblemSet,
        problem: Problem,
        workspace: WorkspaceState,
        now: Instant,
    ) -> Self {
        Self {
            should_quit: false,
            problems,
            session: ProblemSession::new(problem, now),
            workspace,
            execution: ExecutionState::default(),
            ui: UiState::new(),
            messages: MessageState::default(),
            render_dirty: true,
        }
    }

    pub fn current_problem(&self) -> &Problem {
        &self.session.problem
    }

    /// Replaces the session; split ratios and fullscreen carry over.
    pub fn load_problem(&mut self, problem: Problem, now: Instant) {
        self.workspace.dispose();
        self.execution.reset();
        self.session = ProblemSession::new(problem, now);
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        self.messages.clear_expired(now);
    }
}
