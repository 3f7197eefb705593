//! Shared signatures for integration tests.

pub mod averaging;
pub mod shapes;
