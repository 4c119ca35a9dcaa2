//! Derived node, connection, and grouping types emitted by the builder.

use crate::workflow::domain::{TaskId, TaskPriority, TaskStatus};
use serde::Serialize;
use std::collections::HashMap;

use super::summary::WorkflowSummary;

/// Derived, ephemeral view of one task for layout purposes.
///
/// Nodes are recomputed from scratch on every build and never persisted;
/// optional remote fields have already been normalised through the domain
/// defaults by the time a node exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowNode {
    /// Identity copied from the source task row.
    pub id: TaskId,
    /// Display title copied from the source task row.
    pub title: String,
    /// Normalised lifecycle status.
    pub status: TaskStatus,
    /// Normalised priority label.
    pub priority: TaskPriority,
    /// Display label of the owning business, when the snapshot carried one.
    pub business_name: Option<String>,
    /// Stage band this node belongs to.
    pub stage: String,
    /// Ids of direct upstream dependencies within the working set.
    pub upstream: Vec<TaskId>,
    /// Ids of direct downstream dependents within the working set.
    pub downstream: Vec<TaskId>,
    /// Topological depth in the dependency graph.
    pub level: u32,
    /// Horizontal plot coordinate (`level` times the column width).
    pub x: u32,
    /// Vertical plot coordinate within the stacked stage bands.
    pub y: u32,
}

/// Renderable edge between two nodes of the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowConnection {
    /// Task that must complete first.
    pub parent: TaskId,
    /// Task that waits on the parent.
    pub dependent: TaskId,
}

/// One vertical band of nodes sharing a stage label.
///
/// Groups are ordered by the first appearance of their label in the filtered
/// input, making the stacking deterministic independent of map iteration
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageGroup {
    /// Stage label shared by the member tasks.
    pub stage: String,
    /// Member task ids in input order.
    pub task_ids: Vec<TaskId>,
}

/// Complete derived layout for one task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowLayout {
    /// Positioned nodes, one per surviving task row.
    pub nodes: Vec<WorkflowNode>,
    /// Renderable dependency edges between surviving nodes.
    pub connections: Vec<WorkflowConnection>,
    /// Stage bands in first-seen order.
    pub stage_groups: Vec<StageGroup>,
}

impl WorkflowLayout {
    /// Returns `true` when the snapshot produced no nodes.
    ///
    /// Callers render an explicit "no data" state for empty layouts; an
    /// empty result is part of the contract, not a failure.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ids of blocked tasks.
    ///
    /// A task is blocked when it is pending and at least one of its upstream
    /// dependencies has a status other than completed.
    #[must_use]
    pub fn blocked_tasks(&self) -> Vec<TaskId> {
        let statuses: HashMap<TaskId, TaskStatus> = self
            .nodes
            .iter()
            .map(|node| (node.id, node.status))
            .collect();

        self.nodes
            .iter()
            .filter(|node| node.status == TaskStatus::Pending)
            .filter(|node| {
                node.upstream.iter().any(|upstream_id| {
                    statuses
                        .get(upstream_id)
                        .is_none_or(|status| *status != TaskStatus::Completed)
                })
            })
            .map(|node| node.id)
            .collect()
    }

    /// Recomputes aggregate status counts from the node set.
    #[must_use]
    pub fn summary(&self) -> WorkflowSummary {
        WorkflowSummary {
            total: self.nodes.len(),
            completed: self.count_status(TaskStatus::Completed),
            in_progress: self.count_status(TaskStatus::InProgress),
            blocked: self.blocked_tasks().len(),
        }
    }

    fn count_status(&self, status: TaskStatus) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.status == status)
            .count()
    }
}
