//! State space definitions
//!
//! A state space names the state type a planning problem works with and the
//! metadata (dimension, bounds) validity checkers may consult.

use std::fmt::Debug;

use crate::{RealVectorBounds, RealVectorState};

/// Description of a space of states
///
/// Shared by every checker and planner thread of a problem, hence `Send + Sync`.
pub trait StateSpace: Send + Sync {
    /// The state representation of this space
    type State: Clone + Debug + PartialEq + Send + Sync;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Number of degrees of freedom
    fn dimension(&self) -> usize;

    /// Check whether a state lies within the declared bounds
    fn satisfies_bounds(&self, state: &Self::State) -> bool;

    /// Allocate a zeroed state; doubles as a tangent-space buffer
    fn alloc_state(&self) -> Self::State;
}

/// Bounded subset of R^n
#[derive(Clone, Debug)]
pub struct RealVectorStateSpace {
    bounds: RealVectorBounds,
}

impl RealVectorStateSpace {
    pub fn new(bounds: RealVectorBounds) -> Self {
        RealVectorStateSpace { bounds }
    }

    pub fn bounds(&self) -> &RealVectorBounds {
        &self.bounds
    }
}

impl StateSpace for RealVectorStateSpace {
    type State = RealVectorState;

    fn name(&self) -> &str {
        "RealVector"
    }

    fn dimension(&self) -> usize {
        self.bounds.dimension()
    }

    fn satisfies_bounds(&self, state: &RealVectorState) -> bool {
        self.bounds.contains(state.values())
    }

    fn alloc_state(&self) -> RealVectorState {
        RealVectorState::zeros(self.dimension())
    }
}
