//! Reference checkers for tests and benchmarks
//!
//! - `SphereFieldChecker`: spherical obstacles in R^n with exact clearance
//!   and gradients, answering every query in a single pass
//! - `CountingChecker`: counts primitive queries so the default composition
//!   of the richer queries can be observed
//! - `PrimitiveQueries`: forwards only the primitive queries, so the richer
//!   ones fall back to the default composition at no extra cost

use std::sync::atomic::{AtomicU64, Ordering};

use freespace_core::{
    FreespaceError, FreespaceResult, RealVectorState, RealVectorStateSpace, SpaceInformation,
};
use freespace_validity::{
    GradientClearance, StateOf, StateValidityChecker, ValidityCapabilities, ValidityReport,
};
use tracing::debug;

// ============================================================================
// SPHERE FIELD
// ============================================================================

/// Spherical obstacle
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: RealVectorState,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: RealVectorState, radius: f64) -> Self {
        Sphere { center, radius }
    }

    /// Signed distance from `state` to the sphere surface.
    ///
    /// `state` must have the center's dimension. The field checker only
    /// guarantees that for states of its space; debug builds assert it.
    #[inline]
    pub fn signed_distance(&self, state: &RealVectorState) -> f64 {
        debug_assert_eq!(
            state.dimension(),
            self.center.dimension(),
            "state and sphere center dimensions differ"
        );
        state.distance(&self.center) - self.radius
    }
}

/// Obstacle field of spheres.
///
/// A state is valid when it is outside or on the surface of every sphere.
/// Bounds are not checked; wrap in a `BoundedChecker` for that.
#[derive(Debug)]
pub struct SphereFieldChecker<'si> {
    si: &'si SpaceInformation<RealVectorStateSpace>,
    capabilities: ValidityCapabilities,
    obstacles: Vec<Sphere>,
}

impl<'si> SphereFieldChecker<'si> {
    pub fn new(
        si: &'si SpaceInformation<RealVectorStateSpace>,
        obstacles: Vec<Sphere>,
    ) -> FreespaceResult<Self> {
        for (i, sphere) in obstacles.iter().enumerate() {
            if sphere.center.dimension() != si.dimension() {
                return Err(FreespaceError::DimensionMismatch {
                    expected: si.dimension(),
                    actual: sphere.center.dimension(),
                });
            }
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(FreespaceError::InvalidObstacle(format!(
                    "sphere {} has radius {}",
                    i, sphere.radius
                )));
            }
            if !sphere.center.values().iter().all(|v| v.is_finite()) {
                return Err(FreespaceError::InvalidObstacle(format!(
                    "sphere {} has a non-finite center",
                    i
                )));
            }
        }

        debug!(obstacles = obstacles.len(), dimension = si.dimension(), "sphere field created");

        Ok(SphereFieldChecker {
            si,
            capabilities: ValidityCapabilities::new()
                .with_exact_clearance()
                .with_gradient_computation(),
            obstacles,
        })
    }

    pub fn obstacles(&self) -> &[Sphere] {
        &self.obstacles
    }

    /// Nearest obstacle and its signed distance
    fn nearest(&self, state: &RealVectorState) -> Option<(&Sphere, f64)> {
        self.obstacles
            .iter()
            .map(|s| (s, s.signed_distance(state)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl StateValidityChecker for SphereFieldChecker<'_> {
    type Space = RealVectorStateSpace;

    fn space_information(&self) -> &SpaceInformation<RealVectorStateSpace> {
        self.si
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        &self.capabilities
    }

    fn is_valid(&self, state: &RealVectorState) -> bool {
        self.obstacles.iter().all(|s| s.signed_distance(state) >= 0.0)
    }

    fn is_valid_with_clearance(&self, state: &RealVectorState) -> (bool, f64) {
        let distance = self.clearance(state);
        (distance >= 0.0, distance)
    }

    fn is_valid_with_gradient(
        &self,
        state: &RealVectorState,
        gradient: &mut RealVectorState,
    ) -> ValidityReport {
        let clearance = self.clearance_with_gradient(state, gradient);
        ValidityReport {
            valid: clearance.distance >= 0.0,
            clearance: clearance.distance,
            gradient_available: clearance.gradient_available,
        }
    }

    /// Exact clearance; infinite with no obstacles
    fn clearance(&self, state: &RealVectorState) -> f64 {
        self.nearest(state).map_or(f64::INFINITY, |(_, d)| d)
    }

    /// The gradient points from the nearest obstacle's center through
    /// `state`. It is unavailable at a center, where no direction is defined.
    fn clearance_with_gradient(
        &self,
        state: &RealVectorState,
        gradient: &mut RealVectorState,
    ) -> GradientClearance {
        let Some((sphere, distance)) = self.nearest(state) else {
            return GradientClearance::without_gradient(f64::INFINITY);
        };

        let offset = state.distance(&sphere.center);
        if offset == 0.0 || gradient.dimension() != state.dimension() {
            return GradientClearance::without_gradient(distance);
        }

        for (g, (s, c)) in gradient
            .values_mut()
            .iter_mut()
            .zip(state.values().iter().zip(sphere.center.values()))
        {
            *g = (s - c) / offset;
        }

        GradientClearance {
            distance,
            gradient_available: true,
        }
    }
}

// ============================================================================
// COUNTING CHECKER
// ============================================================================

/// Counts the primitive queries made against an inner checker.
///
/// Only `is_valid` and `clearance` are forwarded; the richer queries run
/// through the default composition, so each one is visible as separate
/// primitive calls. Counters are atomic and safe to share across threads.
#[derive(Debug)]
pub struct CountingChecker<C> {
    inner: C,
    validity_calls: AtomicU64,
    clearance_calls: AtomicU64,
}

impl<C: StateValidityChecker> CountingChecker<C> {
    pub fn new(inner: C) -> Self {
        CountingChecker {
            inner,
            validity_calls: AtomicU64::new(0),
            clearance_calls: AtomicU64::new(0),
        }
    }

    pub fn validity_calls(&self) -> u64 {
        self.validity_calls.load(Ordering::Relaxed)
    }

    pub fn clearance_calls(&self) -> u64 {
        self.clearance_calls.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.validity_calls.store(0, Ordering::Relaxed);
        self.clearance_calls.store(0, Ordering::Relaxed);
    }
}

impl<C: StateValidityChecker> StateValidityChecker for CountingChecker<C> {
    type Space = C::Space;

    fn space_information(&self) -> &SpaceInformation<C::Space> {
        self.inner.space_information()
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        self.inner.capabilities()
    }

    fn is_valid(&self, state: &StateOf<C::Space>) -> bool {
        self.validity_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.is_valid(state)
    }

    fn clearance(&self, state: &StateOf<C::Space>) -> f64 {
        self.clearance_calls.fetch_add(1, Ordering::Relaxed);
        self.inner.clearance(state)
    }
}

// ============================================================================
// PRIMITIVE QUERIES
// ============================================================================

/// Hides an inner checker's single-pass overrides.
///
/// Only `is_valid` and `clearance` are forwarded, without bookkeeping.
/// Wrapping a borrowed checker compares its overrides against the default
/// composition over the same obstacles.
#[derive(Debug)]
pub struct PrimitiveQueries<C> {
    inner: C,
}

impl<C: StateValidityChecker> PrimitiveQueries<C> {
    pub fn new(inner: C) -> Self {
        PrimitiveQueries { inner }
    }
}

impl<C: StateValidityChecker> StateValidityChecker for PrimitiveQueries<C> {
    type Space = C::Space;

    fn space_information(&self) -> &SpaceInformation<C::Space> {
        self.inner.space_information()
    }

    fn capabilities(&self) -> &ValidityCapabilities {
        self.inner.capabilities()
    }

    fn is_valid(&self, state: &StateOf<C::Space>) -> bool {
        self.inner.is_valid(state)
    }

    fn clearance(&self, state: &StateOf<C::Space>) -> f64 {
        self.inner.clearance(state)
    }
}
