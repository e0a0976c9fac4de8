//! Freespace Core - State space primitives
//!
//! This crate defines the types validity checkers are written against:
//! - States (RealVectorState)
//! - Bounds (RealVectorBounds)
//! - State spaces (StateSpace, RealVectorStateSpace)
//! - Space information shared by one planning problem
//! - Error types

pub mod state;
pub mod bounds;
pub mod space;
pub mod info;
pub mod error;

pub use state::*;
pub use bounds::*;
pub use space::*;
pub use info::*;
pub use error::*;
