//! Mock servers for client integration testing
//!
//! Simulates the hosted platform API so the typed clients can be driven
//! end to end without real credentials or network access.

pub mod backend;

pub use backend::MockBackend;
