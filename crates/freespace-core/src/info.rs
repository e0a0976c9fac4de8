//! Space information - shared configuration of one planning problem

use tracing::debug;

use crate::{RealVectorBounds, RealVectorStateSpace, StateSpace};

/// The context a planning problem's checkers and planners operate on.
///
/// Owned by whoever sets up the problem. Checkers hold `&SpaceInformation`
/// and so cannot outlive it; nothing here is mutated after construction.
#[derive(Debug)]
pub struct SpaceInformation<S: StateSpace> {
    space: S,
}

impl<S: StateSpace> SpaceInformation<S> {
    pub fn new(space: S) -> Self {
        debug!(
            space = space.name(),
            dimension = space.dimension(),
            "space information created"
        );
        SpaceInformation { space }
    }

    pub fn state_space(&self) -> &S {
        &self.space
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    /// Check whether a state lies within the space's bounds
    #[inline]
    pub fn satisfies_bounds(&self, state: &S::State) -> bool {
        self.space.satisfies_bounds(state)
    }

    pub fn alloc_state(&self) -> S::State {
        self.space.alloc_state()
    }
}

impl SpaceInformation<RealVectorStateSpace> {
    /// Shorthand for a real vector space with the given bounds
    pub fn real_vector(bounds: RealVectorBounds) -> Self {
        SpaceInformation::new(RealVectorStateSpace::new(bounds))
    }
}
