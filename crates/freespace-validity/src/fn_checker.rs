//! Checkers built from closures

use freespace_core::{SpaceInformation, StateSpace};
use tracing::debug;

use crate::{StateOf, StateValidityChecker, ValidityCapabilities};

/// Boxed clearance function for a space, borrowing for at most `'a`
pub type ClearanceFn<'a, S> = Box<dyn Fn(&StateOf<S>) -> f64 + Send + Sync + 'a>;

/// Checker whose validity query is a plain function.
///
/// An optional clearance function can be attached; without one, clearance
/// falls back to the `0.0` default. Capabilities must be declared
/// separately to match whatever the functions compute.
pub struct FnValidityChecker<'si, S: StateSpace, F> {
    si: &'si SpaceInformation<S>,
    capabilities: ValidityCapabilities,
    is_valid: F,
    clearance: Option<ClearanceFn<'si, S>>,
}

impl<'si, S, F> FnValidityChecker<'si, S, F>
where
    S: StateSpace,
    F: Fn(&StateOf<S>) -> bool + Send + Sync,
{
    pub fn new(si: &'si SpaceInformation<S>, is_valid: F) -> Self {
        debug!(space = si.state_space().name(), "function checker created");
        FnValidityChecker {
            si,
            capabilities: ValidityCapabilities::default(),
            is_valid,
            clearance: None,
        }
    }

    /// Attach a clearance function. It may borrow anything that outlives
    /// the space information.
    pub fn with_clearance<C>(mut self, clearance: C) -> Self
    where
        C: Fn(&StateOf<S>) -> f64 + Send + Sync + 'si,
    {
        self.clearance = Some(Box::new(clearance));
        self
    }

    /// Declare the capabilities of the attached functions
    pub fn with_capabilities(mut self, capabilities: ValidityCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

impl<S, F> StateValidityChecker for FnValidityChecker<'_, S, F>
where
    S: StateSpace,
    F: Fn(&StateOf<S>) -> bool + Send + Sync,
{
    type Space = S;

    fn space_information(&self) -> &SpaceInformation<S> {
        self.si
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        &self.capabilities
    }

    fn is_valid(&self, state: &StateOf<S>) -> bool {
        (self.is_valid)(state)
    }

    fn clearance(&self, state: &StateOf<S>) -> f64 {
        match &self.clearance {
            Some(clearance) => clearance(state),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freespace_core::{RealVectorBounds, RealVectorState};

    fn line() -> SpaceInformation<freespace_core::RealVectorStateSpace> {
        SpaceInformation::real_vector(RealVectorBounds::uniform(1, -5.0, 5.0).unwrap())
    }

    #[test]
    fn test_fn_checker_validity_only() {
        let si = line();
        let checker = FnValidityChecker::new(&si, |s: &RealVectorState| s[0].abs() > 1.0);

        assert!(checker.is_valid(&RealVectorState::new(vec![2.0])));
        assert!(!checker.is_valid(&RealVectorState::new(vec![0.5])));
        assert_eq!(checker.clearance(&RealVectorState::new(vec![2.0])), 0.0);
        assert_eq!(*checker.capabilities(), ValidityCapabilities::NONE);
    }

    #[test]
    fn test_fn_checker_with_clearance() {
        let si = line();
        let checker = FnValidityChecker::new(&si, |s: &RealVectorState| s[0].abs() >= 1.0)
            .with_clearance(|s: &RealVectorState| s[0].abs() - 1.0)
            .with_capabilities(ValidityCapabilities::new().with_exact_clearance());

        assert_eq!(
            checker.is_valid_with_clearance(&RealVectorState::new(vec![-3.0])),
            (true, 2.0)
        );
        assert_eq!(
            checker.is_valid_with_clearance(&RealVectorState::new(vec![0.25])),
            (false, -0.75)
        );
        assert!(checker.capabilities().has_exact_clearance);

        let mut gradient = si.alloc_state();
        let report = checker.is_valid_with_gradient(&RealVectorState::new(vec![4.0]), &mut gradient);
        assert!(!report.gradient_available);
        assert_eq!(report.clearance, 3.0);
    }

    #[test]
    fn test_fn_checker_captures_environment() {
        let si = line();
        let obstacles = vec![-2.0, 2.0];
        let checker = FnValidityChecker::new(&si, move |s: &RealVectorState| {
            obstacles.iter().all(|o| (s[0] - o).abs() > 0.5)
        });

        assert!(checker.is_valid(&RealVectorState::new(vec![0.0])));
        assert!(!checker.is_valid(&RealVectorState::new(vec![2.2])));
    }

    #[test]
    fn test_fn_checker_clearance_borrows_environment() {
        let obstacles = vec![-2.0, 2.0];
        let si = line();
        let nearest = |s: &RealVectorState| {
            obstacles
                .iter()
                .map(|o| (s[0] - o).abs() - 0.5)
                .fold(f64::INFINITY, f64::min)
        };
        let checker = FnValidityChecker::new(&si, |s: &RealVectorState| nearest(s) > 0.0)
            .with_clearance(|s: &RealVectorState| nearest(s))
            .with_capabilities(ValidityCapabilities::new().with_exact_clearance());

        assert_eq!(
            checker.is_valid_with_clearance(&RealVectorState::new(vec![0.0])),
            (true, 1.5)
        );
        assert_eq!(
            checker.is_valid_with_clearance(&RealVectorState::new(vec![2.25])),
            (false, -0.25)
        );
    }
}
