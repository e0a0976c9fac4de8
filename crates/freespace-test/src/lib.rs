//! Freespace Test Harness - Validity checker validation
//!
//! This crate provides:
//! - Reference checkers (sphere fields, query counting)
//! - Property fuzzing of the validity contract
//! - Concurrency stress testing
//! - Logging bootstrap for harness runs

pub mod fixtures;
pub mod fuzzer;
pub mod stress;
pub mod logging;

pub use fixtures::*;
pub use fuzzer::*;
pub use stress::*;
pub use logging::*;
