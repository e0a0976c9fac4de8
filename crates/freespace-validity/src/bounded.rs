//! Bounds-enforcing decorator
//!
//! Interpolation and propagation may produce states outside the declared
//! bounds. Wrapping a checker in [`BoundedChecker`] makes those states
//! invalid without the inner checker having to know about bounds.

use freespace_core::SpaceInformation;
use tracing::trace;

use crate::{GradientClearance, StateOf, StateValidityChecker, ValidityCapabilities, ValidityReport};

/// Rejects out-of-bounds states before consulting the inner checker.
///
/// Clearance queries delegate to the inner checker. For an out-of-bounds
/// state the reported distance is clamped to at most `0.0`, so its sign never
/// claims validity, and no gradient is reported: the inner checker's escape
/// direction knows nothing of the bounds. Bounds do not otherwise enter the
/// distance.
#[derive(Debug)]
pub struct BoundedChecker<C> {
    inner: C,
}

impl<C: StateValidityChecker> BoundedChecker<C> {
    pub fn new(inner: C) -> Self {
        BoundedChecker { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    fn in_bounds(&self, state: &StateOf<C::Space>) -> bool {
        let inside = self.inner.space_information().satisfies_bounds(state);
        if !inside {
            trace!(?state, "state rejected: out of bounds");
        }
        inside
    }
}

impl<C: StateValidityChecker> StateValidityChecker for BoundedChecker<C> {
    type Space = C::Space;

    fn space_information(&self) -> &SpaceInformation<C::Space> {
        self.inner.space_information()
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        self.inner.capabilities()
    }

    fn is_valid(&self, state: &StateOf<C::Space>) -> bool {
        self.in_bounds(state) && self.inner.is_valid(state)
    }

    fn is_valid_with_clearance(&self, state: &StateOf<C::Space>) -> (bool, f64) {
        if self.in_bounds(state) {
            self.inner.is_valid_with_clearance(state)
        } else {
            (false, self.inner.clearance(state).min(0.0))
        }
    }

    fn is_valid_with_gradient(
        &self,
        state: &StateOf<C::Space>,
        gradient: &mut StateOf<C::Space>,
    ) -> ValidityReport {
        if self.in_bounds(state) {
            self.inner.is_valid_with_gradient(state, gradient)
        } else {
            ValidityReport {
                valid: false,
                clearance: self.inner.clearance(state).min(0.0),
                gradient_available: false,
            }
        }
    }

    fn clearance(&self, state: &StateOf<C::Space>) -> f64 {
        let distance = self.inner.clearance(state);
        if self.in_bounds(state) {
            distance
        } else {
            distance.min(0.0)
        }
    }

    fn clearance_with_gradient(
        &self,
        state: &StateOf<C::Space>,
        gradient: &mut StateOf<C::Space>,
    ) -> GradientClearance {
        if self.in_bounds(state) {
            self.inner.clearance_with_gradient(state, gradient)
        } else {
            GradientClearance::without_gradient(self.inner.clearance(state).min(0.0))
        }
    }
}
