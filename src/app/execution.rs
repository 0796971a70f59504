use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionKind {
    Run,
    Submit,
}

impl ExecutionKind {
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Run => "Running...",
            Self::Submit => "Submitting...",
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Submit => "Submit",
        }
    }

    pub fn finished_message(self) -> &'static str {
        match self {
            Self::Run => "Run finished",
            Self::Submit => "Submission received",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStatus {
    #[default]
    Idle,
    Pending,
}

/// One-shot Idle -> Pending -> Idle slot backing a run or submit control.
#[derive(Debug, Clone, Default)]
pub struct ExecutionSlot {
    pub status: ExecutionStatus,
    pub started_at: Option<Instant>,
    /// Bumped on every start; completions carrying an older value are stale.
    pub generation: u64,
}

impl ExecutionSlot {
    pub fn is_pending(&self) -> bool {
        self.status == ExecutionStatus::Pending
    }

    /// Control is enabled only while idle.
    pub fn is_enabled(&self) -> bool {
        self.status == ExecutionStatus::Idle
    }

    /// Returns the new generation, or None when already pending.
    pub fn start(&mut self, now: Instant) -> Option<u64> {
        if self.is_pending() {
            return None;
        }
        self.generation += 1;
        self.status = ExecutionStatus::Pending;
        self.started_at = Some(now);
        Some(self.generation)
    }

    /// Returns true if this completion matched the pending run.
    pub fn finish(&mut self, generation: u64) -> bool {
        if !self.is_pending() || generation != self.generation {
            return false;
        }
        self.status = ExecutionStatus::Idle;
        self.started_at = None;
        true
    }

    pub fn reset(&mut self) {
        self.status = ExecutionStatus::Idle;
        self.started_at = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExecutionState {
    pub run: ExecutionSlot,
    pub submit: ExecutionSlot,
}

impl ExecutionState {
    pub fn slot(&self, kind: ExecutionKind) -> &ExecutionSlot {
        match kind {
            ExecutionKind::Run => &self.run,
            ExecutionKind::Submit => &self.submit,
        }
    }

    pub fn slot_mut(&mut self, kind: ExecutionKind) -> &mut ExecutionSlot {
        match kind {
            ExecutionKind::Run => &mut self.run,
            ExecutionKind::Submit => &mut self.submit,
        }
    }

    pub fn any_pending(&self) -> bool {
        self.run.is_pending() || self.submit.is_pending()
    }

    pub fn reset(&mut self) {
        self.run.reset();
        self.submit.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_slot_is_idle_and_enabled() {
        let slot = ExecutionSlot::default();

        assert_eq!(slot.status, ExecutionStatus::Idle);
        assert!(slot.is_enabled());
        assert!(slot.started_at.is_none());
    }

    #[test]
    fn start_moves_to_pending_and_disables() {
        let mut slot = ExecutionSlot::default();
        let now = Instant::now();

        let generation = slot.start(now);

        assert_eq!(generation, Some(1));
        assert!(slot.is_pending());
        assert!(!slot.is_enabled());
        assert_eq!(slot.started_at, Some(now));
    }

    #[test]
    fn start_while_pending_is_rejected() {
        let mut slot = ExecutionSlot::default();
        slot.start(Instant::now());

        assert_eq!(slot.start(Instant::now()), None);
        assert_eq!(slot.generation, 1);
    }

    #[test]
    fn finish_with_current_generation_returns_to_idle() {
        let mut slot = ExecutionSlot::default();
        let generation = slot.start(Instant::now()).unwrap();

        assert!(slot.finish(generation));
        assert!(slot.is_enabled());
    }

    #[test]
    fn stale_finish_keeps_newer_run_pending() {
        let mut slot = ExecutionSlot::default();
        let first = slot.start(Instant::now()).unwrap();
        slot.reset();
        let second = slot.start(Instant::now()).unwrap();

        assert!(!slot.finish(first));
        assert!(slot.is_pending());
        assert!(slot.finish(second));
    }

    #[test]
    fn slots_are_independent() {
        let mut state = ExecutionState::default();

        state.slot_mut(ExecutionKind::Run).start(Instant::now());

        assert!(state.run.is_pending());
        assert!(state.submit.is_enabled());
        assert!(state.any_pending());
    }
}
