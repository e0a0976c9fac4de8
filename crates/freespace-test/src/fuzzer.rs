//! Validity Fuzzer - Property-based testing for validity checkers
//!
//! Tests:
//! - Agreement of the richer queries with `is_valid`
//! - Idempotence of repeated queries
//! - Gradient buffers untouched when no gradient is reported
//! - Negative exact clearance implies invalidity

use freespace_core::{
    FreespaceResult, RealVectorBounds, RealVectorState, RealVectorStateSpace, SpaceInformation,
};
use freespace_validity::StateValidityChecker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::{Sphere, SphereFieldChecker};

/// Fuzzer configuration
#[derive(Clone, Debug)]
pub struct FuzzerConfig {
    /// Number of random states to check
    pub state_count: usize,
    /// Dimension of generated spaces
    pub dimension: usize,
    /// Half-width of generated spaces (bounds are `[-extent, extent]`)
    pub extent: f64,
    /// Number of obstacles in generated sphere fields
    pub obstacle_count: usize,
    /// Largest obstacle radius
    pub max_radius: f64,
    /// Random seed
    pub seed: u64,
}

impl Default for FuzzerConfig {
    fn default() -> Self {
        FuzzerConfig {
            state_count: 1000,
            dimension: 3,
            extent: 10.0,
            obstacle_count: 8,
            max_radius: 2.0,
            seed: 42,
        }
    }
}

impl FuzzerConfig {
    /// Light fuzzing for quick tests
    pub fn light() -> Self {
        FuzzerConfig {
            state_count: 100,
            dimension: 2,
            extent: 5.0,
            obstacle_count: 3,
            max_radius: 1.5,
            seed: 42,
        }
    }

    /// Heavy fuzzing for thorough testing
    pub fn heavy() -> Self {
        FuzzerConfig {
            state_count: 20000,
            dimension: 7,
            extent: 10.0,
            obstacle_count: 64,
            max_radius: 3.0,
            seed: 42,
        }
    }

    /// Bounds of the generated space
    pub fn bounds(&self) -> FreespaceResult<RealVectorBounds> {
        RealVectorBounds::uniform(self.dimension, -self.extent, self.extent)
    }

    /// Space information for the generated space
    pub fn space_information(&self) -> FreespaceResult<SpaceInformation<RealVectorStateSpace>> {
        Ok(SpaceInformation::real_vector(self.bounds()?))
    }
}

/// Validity fuzzer
pub struct ValidityFuzzer {
    config: FuzzerConfig,
    rng: StdRng,
}

impl ValidityFuzzer {
    /// Create a new fuzzer
    pub fn new(config: FuzzerConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        ValidityFuzzer { config, rng }
    }

    pub fn config(&self) -> &FuzzerConfig {
        &self.config
    }

    /// Generate a random state.
    ///
    /// Coordinates are drawn from bounds widened by 10% per side so that
    /// out-of-bounds states are exercised too.
    pub fn random_state(&mut self, bounds: &RealVectorBounds) -> RealVectorState {
        let values = bounds
            .low()
            .iter()
            .zip(bounds.high())
            .map(|(&low, &high)| {
                let margin = (high - low) * 0.1;
                if margin > 0.0 {
                    self.rng.gen_range(low - margin..high + margin)
                } else {
                    low
                }
            })
            .collect();
        RealVectorState::new(values)
    }

    /// Generate `count` random states
    pub fn random_states(&mut self, bounds: &RealVectorBounds, count: usize) -> Vec<RealVectorState> {
        (0..count).map(|_| self.random_state(bounds)).collect()
    }

    /// Generate a random sphere field over `si`
    pub fn sphere_field<'si>(
        &mut self,
        si: &'si SpaceInformation<RealVectorStateSpace>,
    ) -> FreespaceResult<SphereFieldChecker<'si>> {
        let bounds = si.state_space().bounds().clone();
        let max_radius = self.config.max_radius.max(f64::EPSILON);

        let obstacles = (0..self.config.obstacle_count)
            .map(|_| {
                let center = self.random_state(&bounds);
                let radius = self.rng.gen_range(f64::EPSILON..=max_radius);
                Sphere::new(center, radius)
            })
            .collect();

        SphereFieldChecker::new(si, obstacles)
    }

    /// Run the fuzzer against a checker
    pub fn run<C>(&mut self, checker: &C) -> FuzzResult
    where
        C: StateValidityChecker<Space = RealVectorStateSpace> + ?Sized,
    {
        let bounds = checker.space_information().state_space().bounds().clone();
        let exact = checker.capabilities().has_exact_clearance;
        let mut result = FuzzResult::new();

        for _ in 0..self.config.state_count {
            let state = self.random_state(&bounds);
            result.states_checked += 1;

            if !properties::overloads_agree(checker, &state) {
                result.agreement_violations += 1;
            }
            if !properties::idempotent(checker, &state) {
                result.idempotence_violations += 1;
            }
            if !properties::gradient_buffer_respected(checker, &state) {
                result.gradient_violations += 1;
            }
            if exact && !properties::negative_clearance_is_invalid(checker, &state) {
                result.sign_violations += 1;
            }
        }

        if result.is_clean() {
            debug!(states = result.states_checked, "fuzz run clean");
        } else {
            warn!(?result, "fuzz run found violations");
        }

        result
    }
}

/// Fuzzing result
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FuzzResult {
    pub states_checked: u64,
    pub agreement_violations: u64,
    pub idempotence_violations: u64,
    pub gradient_violations: u64,
    pub sign_violations: u64,
}

impl FuzzResult {
    pub fn new() -> Self {
        FuzzResult::default()
    }

    pub fn violations(&self) -> u64 {
        self.agreement_violations
            + self.idempotence_violations
            + self.gradient_violations
            + self.sign_violations
    }

    pub fn is_clean(&self) -> bool {
        self.violations() == 0
    }
}

/// Property checks over a single state
pub mod properties {
    use freespace_validity::{StateOf, StateValidityChecker};

    fn same_distance(a: f64, b: f64) -> bool {
        a == b || (a.is_nan() && b.is_nan())
    }

    /// Property: the richer queries report the same validity as `is_valid`
    pub fn overloads_agree<C>(checker: &C, state: &StateOf<C::Space>) -> bool
    where
        C: StateValidityChecker + ?Sized,
    {
        let valid = checker.is_valid(state);
        let mut gradient = checker.space_information().alloc_state();
        checker.is_valid_with_clearance(state).0 == valid
            && checker.is_valid_with_gradient(state, &mut gradient).valid == valid
    }

    /// Property: asking twice gives the same answer
    pub fn idempotent<C>(checker: &C, state: &StateOf<C::Space>) -> bool
    where
        C: StateValidityChecker + ?Sized,
    {
        let (v1, d1) = checker.is_valid_with_clearance(state);
        let (v2, d2) = checker.is_valid_with_clearance(state);
        v1 == v2
            && same_distance(d1, d2)
            && checker.is_valid(state) == checker.is_valid(state)
            && same_distance(checker.clearance(state), checker.clearance(state))
    }

    /// Property: the gradient buffer is only written when a gradient is reported
    pub fn gradient_buffer_respected<C>(checker: &C, state: &StateOf<C::Space>) -> bool
    where
        C: StateValidityChecker + ?Sized,
    {
        let sentinel = checker.space_information().alloc_state();
        let mut gradient = sentinel.clone();
        let clearance = checker.clearance_with_gradient(state, &mut gradient);
        clearance.gradient_available || gradient == sentinel
    }

    /// Property: a negative clearance never comes with a valid state
    pub fn negative_clearance_is_invalid<C>(checker: &C, state: &StateOf<C::Space>) -> bool
    where
        C: StateValidityChecker + ?Sized,
    {
        let (valid, distance) = checker.is_valid_with_clearance(state);
        !(valid && distance < 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freespace_validity::{AllValidChecker, BoundedChecker, FnValidityChecker, ValidityCapabilities};

    #[test]
    fn test_fuzzer_light_sphere_field() {
        let config = FuzzerConfig::light();
        let si = config.space_information().unwrap();
        let mut fuzzer = ValidityFuzzer::new(config);
        let checker = fuzzer.sphere_field(&si).unwrap();

        let result = fuzzer.run(&checker);
        assert_eq!(result.states_checked, 100);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_fuzzer_default_bounded_field() {
        let config = FuzzerConfig::default();
        let si = config.space_information().unwrap();
        let mut fuzzer = ValidityFuzzer::new(config);
        let checker = BoundedChecker::new(fuzzer.sphere_field(&si).unwrap());

        let result = fuzzer.run(&checker);
        assert!(result.is_clean(), "{:?}", result);
    }

    #[test]
    fn test_fuzzer_all_valid() {
        let config = FuzzerConfig::light();
        let si = config.space_information().unwrap();
        let mut fuzzer = ValidityFuzzer::new(config);

        assert!(fuzzer.run(&AllValidChecker::new(&si)).is_clean());
    }

    #[test]
    fn test_fuzzer_detects_sign_violation() {
        let config = FuzzerConfig::light();
        let si = config.space_information().unwrap();
        let mut fuzzer = ValidityFuzzer::new(config);
        let checker = FnValidityChecker::new(&si, |_: &RealVectorState| true)
            .with_clearance(|_: &RealVectorState| -1.0)
            .with_capabilities(ValidityCapabilities::new().with_exact_clearance());

        let result = fuzzer.run(&checker);
        assert_eq!(result.sign_violations, result.states_checked);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_random_states_cover_outside_bounds() {
        let config = FuzzerConfig::light();
        let si = config.space_information().unwrap();
        let bounds = config.bounds().unwrap();
        let mut fuzzer = ValidityFuzzer::new(config);

        let states = fuzzer.random_states(&bounds, 500);
        assert_eq!(states.len(), 500);
        assert!(states.iter().any(|s| !si.satisfies_bounds(s)));
        assert!(states.iter().any(|s| si.satisfies_bounds(s)));
    }

    #[test]
    fn test_same_seed_same_states() {
        let bounds = FuzzerConfig::light().bounds().unwrap();
        let a = ValidityFuzzer::new(FuzzerConfig::light()).random_states(&bounds, 10);
        let b = ValidityFuzzer::new(FuzzerConfig::light()).random_states(&bounds, 10);
        assert_eq!(a, b);
    }
}
