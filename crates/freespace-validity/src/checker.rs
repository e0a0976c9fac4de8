//! The state validity checking contract
//!
//! Planners ask a checker whether a state is admissible at up to three
//! levels of detail:
//!
//! 1. [`is_valid`](StateValidityChecker::is_valid) - validity only (mandatory)
//! 2. [`is_valid_with_clearance`](StateValidityChecker::is_valid_with_clearance) -
//!    validity and signed distance to the nearest invalid state
//! 3. [`is_valid_with_gradient`](StateValidityChecker::is_valid_with_gradient) -
//!    validity, distance, and a direction away from invalidity
//!
//! Only `is_valid` must be implemented. Every richer query has a default built
//! on the cheaper ones, so a planner written against the richest query still
//! runs against a checker that only knows `is_valid`.
//!
//! # Non-atomic defaults
//!
//! The default richer queries call `clearance` and then `is_valid` as two
//! separate queries. Validity is never derived from the sign of the distance.
//! A checker that computes both in one pass should override the richer
//! queries directly.
//!
//! # Threading
//!
//! Every query takes `&self` and checkers are `Send + Sync`: many planner
//! threads may query one checker at once. Any interior state a checker keeps
//! must tolerate concurrent reads.

use std::sync::Arc;

use freespace_core::{SpaceInformation, StateSpace};

use crate::ValidityCapabilities;

/// State type of a space
pub type StateOf<S> = <S as StateSpace>::State;

/// Clearance together with the gradient flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientClearance {
    /// Signed distance to the nearest invalid state; negative is penetration depth
    pub distance: f64,
    /// Whether the caller's gradient buffer was written
    pub gradient_available: bool,
}

impl GradientClearance {
    /// Clearance without a gradient
    pub fn without_gradient(distance: f64) -> Self {
        GradientClearance {
            distance,
            gradient_available: false,
        }
    }
}

/// Answer to the richest validity query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidityReport {
    pub valid: bool,
    /// Signed distance to the nearest invalid state; negative is penetration depth
    pub clearance: f64,
    /// Whether the caller's gradient buffer was written
    pub gradient_available: bool,
}

/// Checks the validity of states of one space.
///
/// Implementations must be thread safe. The space information is borrowed,
/// never owned: it outlives every checker built on it.
pub trait StateValidityChecker: Send + Sync {
    /// The space whose states this checker evaluates
    type Space: StateSpace;

    /// The space information this checker operates on
    fn space_information(&self) -> &SpaceInformation<Self::Space>;

    /// Capabilities of this checker
    fn capabilities(&self) -> &ValidityCapabilities;

    /// Return true if `state` is valid. Usually this means at least collision
    /// checking. If the space can produce states outside its bounds (e.g. by
    /// interpolation or propagation), this should also check
    /// [`SpaceInformation::satisfies_bounds`].
    fn is_valid(&self, state: &StateOf<Self::Space>) -> bool;

    /// Return validity and the distance to the nearest invalid state.
    ///
    /// Default: `clearance(state)`, then `is_valid(state)`.
    fn is_valid_with_clearance(&self, state: &StateOf<Self::Space>) -> (bool, f64) {
        let distance = self.clearance(state);
        (self.is_valid(state), distance)
    }

    /// Return validity, the distance to the nearest invalid state, and if
    /// available a direction that moves `state` away from invalidity, written
    /// into `gradient` (an element of the tangent space at `state`).
    ///
    /// Default: `clearance_with_gradient(state, gradient)`, then `is_valid(state)`.
    fn is_valid_with_gradient(
        &self,
        state: &StateOf<Self::Space>,
        gradient: &mut StateOf<Self::Space>,
    ) -> ValidityReport {
        let clearance = self.clearance_with_gradient(state, gradient);
        ValidityReport {
            valid: self.is_valid(state),
            clearance: clearance.distance,
            gradient_available: clearance.gradient_available,
        }
    }

    /// Distance from `state` to the nearest invalid state. A negative value is
    /// the penetration depth. Default is `0.0`: no clearance information.
    fn clearance(&self, _state: &StateOf<Self::Space>) -> f64 {
        0.0
    }

    /// Distance to the nearest invalid state and, if available, the gradient
    /// that moves away from it. The default leaves `gradient` untouched and
    /// reports it unavailable.
    fn clearance_with_gradient(
        &self,
        state: &StateOf<Self::Space>,
        _gradient: &mut StateOf<Self::Space>,
    ) -> GradientClearance {
        GradientClearance::without_gradient(self.clearance(state))
    }
}

/// A checker shared across planner threads
pub type SharedChecker<'si, S> = Arc<dyn StateValidityChecker<Space = S> + 'si>;

macro_rules! forward_checker {
    ($($ptr:ty),*) => {
        $(
            impl<C: StateValidityChecker + ?Sized> StateValidityChecker for $ptr {
                type Space = C::Space;

                fn space_information(&self) -> &SpaceInformation<C::Space> {
                    (**self).space_information()
                }

                fn capabilities(&self) -> &ValidityCapabilities {
                    (**self).capabilities()
                }

                fn is_valid(&self, state: &StateOf<C::Space>) -> bool {
                    (**self).is_valid(state)
                }

                fn is_valid_with_clearance(&self, state: &StateOf<C::Space>) -> (bool, f64) {
                    (**self).is_valid_with_clearance(state)
                }

                fn is_valid_with_gradient(
                    &self,
                    state: &StateOf<C::Space>,
                    gradient: &mut StateOf<C::Space>,
                ) -> ValidityReport {
                    (**self).is_valid_with_gradient(state, gradient)
                }

                fn clearance(&self, state: &StateOf<C::Space>) -> f64 {
                    (**self).clearance(state)
                }

                fn clearance_with_gradient(
                    &self,
                    state: &StateOf<C::Space>,
                    gradient: &mut StateOf<C::Space>,
                ) -> GradientClearance {
                    (**self).clearance_with_gradient(state, gradient)
                }
            }
        )*
    };
}

forward_checker!(&C, Box<C>, Arc<C>);
