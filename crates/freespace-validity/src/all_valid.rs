//! The simplest checker: every state is valid

use freespace_core::{SpaceInformation, StateSpace};
use tracing::debug;

use crate::{StateOf, StateValidityChecker, ValidityCapabilities};

/// Reports every state valid.
///
/// Keeps the default clearance (`0.0`) and gradient (unavailable) queries and
/// advertises no capabilities. Useful for unconstrained or pre-filtered spaces.
#[derive(Debug)]
pub struct AllValidChecker<'si, S: StateSpace> {
    si: &'si SpaceInformation<S>,
    capabilities: ValidityCapabilities,
}

impl<'si, S: StateSpace> AllValidChecker<'si, S> {
    pub fn new(si: &'si SpaceInformation<S>) -> Self {
        debug!(space = si.state_space().name(), "all-valid checker created");
        AllValidChecker {
            si,
            capabilities: ValidityCapabilities::default(),
        }
    }
}

impl<S: StateSpace> StateValidityChecker for AllValidChecker<'_, S> {
    type Space = S;

    fn space_information(&self) -> &SpaceInformation<S> {
        self.si
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        &self.capabilities
    }

    fn is_valid(&self, _state: &StateOf<S>) -> bool {
        true
    }
}
