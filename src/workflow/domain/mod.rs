//! Domain model for workflow task snapshots.
//!
//! The workflow domain models the task rows supplied by the remote table
//! backend: identifiers, lifecycle status, priority, stage labelling, and
//! declared dependency edges. Loosely-shaped remote fields are normalised
//! here, once, at the boundary, so the layout engine never defaults ad hoc.

mod error;
mod ids;
mod record;
mod status;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::{BusinessId, TaskId};
pub use record::{DependencyEdge, TaskRecord, UNKNOWN_STAGE};
pub use status::{TaskPriority, TaskStatus};
