//! Initialization logic for the logging setup shared between the workspace
//! binaries and their tests.
pub mod tracing;
