//! Freespace Validity - State validity checking for motion planners
//!
//! This crate implements the validity contract planners query:
//! - Capability descriptors
//! - The checker trait with default clearance and gradient queries
//! - The all-valid baseline checker
//! - Closure-backed and bounds-enforcing checkers
//! - Opt-in capability auditing

pub mod capabilities;
pub mod checker;
pub mod all_valid;
pub mod fn_checker;
pub mod bounded;
pub mod audit;

pub use capabilities::*;
pub use checker::*;
pub use all_valid::*;
pub use fn_checker::*;
pub use bounded::*;
pub use audit::*;
