//! Executes side effects returned by the reducer.
//!
//! Execution tasks run detached on the tokio runtime and report back through
//! `action_tx`. Each kind owns at most one live `CancellationToken`; spawning a
//! new task of the same kind cancels the previous one.

use std::collections::HashMap;
use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::execution::ExecutionKind;
use crate::app::ports::{ExecutionBackend, Renderer};
use crate::app::state::AppState;

pub struct EffectRunner {
    execution_backend: Arc<dyn ExecutionBackend>,
    action_tx: mpsc::Sender<Action>,
    in_flight: HashMap<ExecutionKind, CancellationToken>,
}

impl EffectRunner {
    pub fn new(
        execution_backend: Arc<dyn ExecutionBackend>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            execution_backend,
            action_tx,
            in_flight: HashMap::new(),
        }
    }

    pub fn run(
        &mut self,
        effects: Vec<Effect>,
        renderer: &mut impl Renderer,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Render => {
                    let output = renderer.draw(state)?;
                    state.ui.geometry = output.geometry;
                }
                Effect::SpawnExecution { kind, generation } => {
                    self.spawn_execution(kind, generation);
                }
                Effect::CancelExecutions => self.cancel_all(),
            }
        }
        Ok(())
    }

    fn spawn_execution(&mut self, kind: ExecutionKind, generation: u64) {
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.insert(kind, token.clone()) {
            previous.cancel();
        }

        let backend = Arc::clone(&self.execution_backend);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = tokio::select! {
                () = token.cancelled() => {
                    tracing::debug!(?kind, generation, "execution cancelled");
                    return;
                }
                result = backend.execute(kind) => match result {
                    Ok(()) => Action::ExecutionFinished { kind, generation },
                    Err(e) => Action::ExecutionFailed {
                        kind,
                        generation,
                        error: e.to_string(),
                    },
                },
            };
            let _ = tx.send(action).await;
        });
    }

    fn cancel_all(&mut self) {
        for (kind, token) in self.in_flight.drain() {
            tracing::debug!(?kind, "cancelling execution");
            token.cancel();
        }
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight
            .values()
            .filter(|token| !token.is_cancelled())
            .count()
    }
}
