//! Service layer producing workflow layouts from a snapshot source.

use crate::workflow::{
    domain::BusinessId,
    layout::{WorkflowLayout, build_workflow},
    ports::{TaskSource, TaskSourceError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for workflow overview operations.
#[derive(Debug, Clone, Error)]
pub enum WorkflowOverviewError {
    /// Snapshot retrieval failed.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
}

/// Result type for workflow overview operations.
pub type WorkflowOverviewResult<T> = Result<T, WorkflowOverviewError>;

/// Fetches task snapshots and derives their rendered layout.
///
/// The service owns nothing: it reads whatever snapshot the source supplies
/// and hands it to the pure builder, so repeated calls with an unchanged
/// backend produce identical layouts.
#[derive(Clone)]
pub struct WorkflowOverviewService<S>
where
    S: TaskSource,
{
    source: Arc<S>,
}

impl<S> WorkflowOverviewService<S>
where
    S: TaskSource,
{
    /// Creates a new overview service.
    #[must_use]
    pub const fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Builds the layout for the current snapshot.
    ///
    /// When `scope` is given, the layout contains only that business's
    /// tasks even if the source returns a superset; scoping is re-applied
    /// by the builder.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowOverviewError::Source`] when snapshot retrieval
    /// fails. Layout construction itself cannot fail.
    pub async fn overview(
        &self,
        scope: Option<BusinessId>,
    ) -> WorkflowOverviewResult<WorkflowLayout> {
        let tasks = self.source.fetch_tasks(scope).await?;
        Ok(build_workflow(&tasks, scope))
    }
}
