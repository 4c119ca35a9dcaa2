//! Shared world state for workflow layout BDD scenarios.

use beewise_workflow::workflow::{
    domain::{TaskId, TaskRecord},
    layout::WorkflowLayout,
};
use rstest::fixture;

/// Scenario world for workflow layout behaviour tests.
pub struct WorkflowLayoutWorld {
    pub rows: Vec<TaskRecord>,
    pub last_layout: Option<WorkflowLayout>,
}

impl WorkflowLayoutWorld {
    /// Creates a world with no declared task rows.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            last_layout: None,
        }
    }

    /// Returns a mutable reference to the declared row with the given id.
    pub fn row_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.rows.iter_mut().find(|row| row.id == id)
    }
}

impl Default for WorkflowLayoutWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> WorkflowLayoutWorld {
    WorkflowLayoutWorld::new()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
