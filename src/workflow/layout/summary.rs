//! Aggregate status counts for the dashboard summary strip.

use serde::Serialize;

/// Counts derived from one layout's node set.
///
/// The summary is recomputed on demand rather than independently maintained,
/// so it can never drift from the nodes it describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowSummary {
    /// Number of nodes in the layout.
    pub total: usize,
    /// Nodes with completed status.
    pub completed: usize,
    /// Nodes with in-progress status.
    pub in_progress: usize,
    /// Pending nodes with at least one incomplete upstream dependency.
    pub blocked: usize,
}
