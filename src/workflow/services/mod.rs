//! Application services for workflow overview orchestration.

mod overview;

pub use overview::{WorkflowOverviewError, WorkflowOverviewResult, WorkflowOverviewService};
