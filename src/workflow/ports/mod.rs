//! Port contracts for workflow snapshot retrieval.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow services.

pub mod source;

pub use source::{TaskSource, TaskSourceError, TaskSourceResult};
