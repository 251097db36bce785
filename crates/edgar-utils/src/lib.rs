//! Shared utilities for edgar-rs
//!
//! Logging setup used by the `edgar` binary and the client examples.

pub mod logging;

pub use logging::{init_tracing, init_tracing_with};
