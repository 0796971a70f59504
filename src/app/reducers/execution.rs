//! Run/submit sub-reducer: Idle -> Pending on start, back to Idle on a
//! matching completion.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::state::AppState;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_execution(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::StartExecution(kind) => {
            let Some(generation) = state.execution.slot_mut(*kind).start(now) else {
                return Some(vec![]);
            };
            tracing::info!(
                ?kind,
                generation,
                problem = state.session.problem.number,
                "execution started"
            );
            Some(vec![Effect::SpawnExecution {
                kind: *kind,
                generation,
            }])
        }
        Action::ExecutionFinished { kind, generation } => {
            if state.execution.slot_mut(*kind).finish(*generation) {
                tracing::info!(?kind, generation, "execution finished");
                state.messages.success(kind.finished_message(), now);
            } else {
                tracing::debug!(?kind, generation, "stale execution completion dropped");
            }
            Some(vec![])
        }
        Action::ExecutionFailed {
            kind,
            generation,
            error,
        } => {
            if state.execution.slot_mut(*kind).finish(*generation) {
                tracing::warn!(?kind, generation, %error, "execution failed");
                state
                    .messages
                    .error(format!("{} failed: {error}", kind.idle_label()), now);
            }
            Some(vec![])
        }
        _ => None,
    }
}
