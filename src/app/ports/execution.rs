use async_trait::async_trait;
use thiserror::Error;

use crate::app::execution::ExecutionKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("execution backend failed: {0}")]
    Backend(String),
}

/// Runs or submits the current code. Completion carries no result payload;
/// the caller only learns that the request settled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn execute(&self, kind: ExecutionKind) -> Result<(), ExecutionError>;
}
