//! Workflow graph construction for the `BeeWise` dashboard.
//!
//! This module turns flat task snapshots into a layered dependency layout:
//! nodes carry a topological level and plot coordinates, edges become
//! renderable connections, and stage labels group nodes into vertical bands.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Pure layout computation in [`layout`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod layout;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
