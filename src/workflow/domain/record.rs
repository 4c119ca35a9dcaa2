//! Task snapshot records as supplied by the remote table backend.

use super::{BusinessId, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Stage bucket used for tasks whose records carry no stage label.
pub const UNKNOWN_STAGE: &str = "Unknown";

/// Declared dependency edge between two task rows.
///
/// The edge is directed: the parent task must precede the dependent task.
/// Endpoint ids are not validated here; edges referring to tasks outside the
/// working set are dropped silently by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Task that must complete first.
    pub parent_task_id: TaskId,
    /// Task that waits on the parent.
    pub dependent_task_id: TaskId,
}

impl DependencyEdge {
    /// Creates a dependency edge from parent to dependent.
    #[must_use]
    pub const fn new(parent_task_id: TaskId, dependent_task_id: TaskId) -> Self {
        Self {
            parent_task_id,
            dependent_task_id,
        }
    }

    /// Returns `true` when both endpoints name the same task.
    ///
    /// Self-referential edges are a known data-quality issue in remote
    /// records and are filtered before level assignment.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.parent_task_id == self.dependent_task_id
    }
}

/// Snapshot of one task row.
///
/// Optional fields mirror the loosely-shaped remote schema; normalisation
/// happens through the `*_or_default` accessors so downstream code sees one
/// consistent defaulting policy. Records are read-only snapshots: the crate
/// has no write path back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Remote row identifier, assumed unique within one snapshot.
    pub id: TaskId,
    /// Human-readable task title.
    pub title: String,
    /// Lifecycle status; unknown or missing values fall back to pending.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<TaskStatus>,
    /// Priority label; unknown or missing values fall back to medium.
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<TaskPriority>,
    /// Owning business row.
    pub business_id: BusinessId,
    /// Display label of the owning business, when the snapshot joins it in.
    #[serde(default)]
    pub business_name: Option<String>,
    /// Business-lifecycle stage label used for vertical grouping.
    #[serde(default)]
    pub stage_name: Option<String>,
    /// Declared dependency edges touching this task.
    #[serde(default)]
    pub dependencies: Vec<DependencyEdge>,
    /// Remote creation timestamp, carried for display only.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Remote last-modification timestamp, carried for display only.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Creates a minimal record with required remote fields.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, business_id: BusinessId) -> Self {
        Self {
            id,
            title: title.into(),
            status: None,
            priority: None,
            business_id,
            business_name: None,
            stage_name: None,
            dependencies: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority label.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the business display label.
    #[must_use]
    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    /// Sets the stage label.
    #[must_use]
    pub fn with_stage_name(mut self, stage: impl Into<String>) -> Self {
        self.stage_name = Some(stage.into());
        self
    }

    /// Declares a dependency of this task on `parent`.
    #[must_use]
    pub fn with_dependency_on(mut self, parent: TaskId) -> Self {
        self.dependencies.push(DependencyEdge::new(parent, self.id));
        self
    }

    /// Appends a raw dependency edge as declared by the remote row.
    #[must_use]
    pub fn with_edge(mut self, edge: DependencyEdge) -> Self {
        self.dependencies.push(edge);
        self
    }

    /// Returns the status, defaulting missing values to pending.
    #[must_use]
    pub fn status_or_default(&self) -> TaskStatus {
        self.status.unwrap_or(TaskStatus::Pending)
    }

    /// Returns the priority, defaulting missing values to medium.
    #[must_use]
    pub fn priority_or_default(&self) -> TaskPriority {
        self.priority.unwrap_or(TaskPriority::Medium)
    }

    /// Returns the stage label, mapping missing stages to [`UNKNOWN_STAGE`].
    #[must_use]
    pub fn stage_label(&self) -> &str {
        self.stage_name.as_deref().unwrap_or(UNKNOWN_STAGE)
    }
}

/// Deserialises a status string, mapping unknown values to `None`.
///
/// The remote backend has no schema enforcement, so a single malformed row
/// must not fail the whole snapshot; it degrades to the boundary default.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<TaskStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| TaskStatus::try_from(value.as_str()).ok()))
}

/// Deserialises a priority string, mapping unknown values to `None`.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<TaskPriority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| TaskPriority::try_from(value.as_str()).ok()))
}
