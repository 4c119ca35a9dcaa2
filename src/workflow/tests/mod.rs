//! Unit tests for workflow graph construction.
