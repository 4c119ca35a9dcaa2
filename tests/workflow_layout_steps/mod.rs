//! Step definitions for workflow layout BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
