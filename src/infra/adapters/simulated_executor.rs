use std::time::Duration;

use async_trait::async_trait;

use crate::app::execution::ExecutionKind;
use crate::app::ports::{ExecutionBackend, ExecutionError};
use crate::infra::config::ExecutionConfig;

/// Stand-in backend: waits the configured delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedExecutor {
    run_delay: Duration,
    submit_delay: Duration,
}

impl SimulatedExecutor {
    pub fn new(run_delay: Duration, submit_delay: Duration) -> Self {
        Self {
            run_delay,
            submit_delay,
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(config.run_delay(), config.submit_delay())
    }

    pub fn delay(&self, kind: ExecutionKind) -> Duration {
        match kind {
            ExecutionKind::Run => self.run_delay,
            ExecutionKind::Submit => self.submit_delay,
        }
    }
}

impl Default for SimulatedExecutor {
    fn default() -> Self {
        Self::from_config(&ExecutionConfig::default())
    }
}

#[async_trait]
impl ExecutionBackend for SimulatedExecutor {
    async fn execute(&self, kind: ExecutionKind) -> Result<(), ExecutionError> {
        tokio::time::sleep(self.delay(kind)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn default_delays_match_run_and_submit() {
        let executor = SimulatedExecutor::default();

        assert_eq!(executor.delay(ExecutionKind::Run), Duration::from_millis(1000));
        assert_eq!(
            executor.delay(ExecutionKind::Submit),
            Duration::from_millis(1500)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn run_completes_after_its_delay() {
        let executor = SimulatedExecutor::default();
        let started = Instant::now();

        executor.execute(ExecutionKind::Run).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn submit_is_still_pending_before_its_delay() {
        let executor = SimulatedExecutor::default();

        let outcome = tokio::time::timeout(
            Duration::from_millis(1499),
            executor.execute(ExecutionKind::Submit),
        )
        .await;

        assert!(outcome.is_err());
    }
}
