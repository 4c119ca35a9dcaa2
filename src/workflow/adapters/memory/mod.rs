//! In-memory adapter implementations for workflow ports.

mod source;

pub use source::InMemoryTaskSource;
