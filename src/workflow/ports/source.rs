//! Snapshot source port for task rows.

use crate::workflow::domain::{BusinessId, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Snapshot retrieval contract.
///
/// Any remote-table backend satisfying the [`TaskRecord`] row shape is
/// interchangeable behind this port. Implementations may ignore `scope` and
/// return a superset; the layout builder re-applies scoping, so filtering
/// here is an optimisation, not a correctness requirement.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Fetches the current task snapshot, optionally scoped to one business.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the backend is unreachable or
    /// returns rows the adapter cannot decode.
    async fn fetch_tasks(&self, scope: Option<BusinessId>) -> TaskSourceResult<Vec<TaskRecord>>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The backend request failed.
    #[error("task source backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend returned rows that do not decode into [`TaskRecord`].
    #[error("task snapshot decode error: {0}")]
    Decode(Arc<serde_json::Error>),
}

impl TaskSourceError {
    /// Wraps a backend transport error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskSourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(Arc::new(err))
    }
}
