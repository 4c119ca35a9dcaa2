//! `BeeWise` workflow core: task dependency layout and status aggregation.
//!
//! This crate implements the workflow-graph engine behind the `BeeWise`
//! business dashboard. It consumes snapshots of task records fetched from a
//! generic remote table backend and derives a layered dependency layout:
//! topological level assignment, stage grouping with plot coordinates, the
//! renderable connection set, and aggregate status counts.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record types with boundary defaulting, no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for snapshot retrieval
//! - **Adapters**: Concrete implementations of ports
//! - **Layout**: The pure workflow graph builder
//!
//! # Example
//!
//! ```
//! use beewise_workflow::workflow::domain::{BusinessId, TaskId, TaskRecord, TaskStatus};
//! use beewise_workflow::workflow::layout::build_workflow;
//!
//! let tasks = vec![
//!     TaskRecord::new(TaskId::new(1), "Register company", BusinessId::new(10))
//!         .with_status(TaskStatus::Completed)
//!         .with_stage_name("Foundation"),
//!     TaskRecord::new(TaskId::new(2), "Open bank account", BusinessId::new(10))
//!         .with_stage_name("Foundation")
//!         .with_dependency_on(TaskId::new(1)),
//! ];
//!
//! let layout = build_workflow(&tasks, None);
//! assert_eq!(layout.nodes.len(), 2);
//! assert_eq!(layout.summary().completed, 1);
//! ```

pub mod workflow;
