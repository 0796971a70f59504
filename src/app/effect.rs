//! Side effects returned by the reducer, executed by EffectRunner.

use crate::app::execution::ExecutionKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render,

    /// Spawns a cancellable execution task; completion is reported back as
    /// `Action::ExecutionFinished` with the same generation.
    SpawnExecution {
        kind: ExecutionKind,
        generation: u64,
    },

    /// Aborts every in-flight execution task
    CancelExecutions,
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}
