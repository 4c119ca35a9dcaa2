//! Pure layout computation for workflow dependency graphs.
//!
//! The layout engine is a pure function of one task snapshot: it assigns a
//! topological level to every node, groups nodes into stage bands with plot
//! coordinates, derives the renderable connection set, and exposes aggregate
//! status counts. It performs no I/O and by contract never fails; malformed
//! input degrades through the domain boundary defaults.

mod builder;
mod geometry;
mod node;
mod summary;

pub use builder::build_workflow;
pub use geometry::{COLUMN_WIDTH, GROUP_GAP, ROW_HEIGHT};
pub use node::{StageGroup, WorkflowConnection, WorkflowLayout, WorkflowNode};
pub use summary::WorkflowSummary;
