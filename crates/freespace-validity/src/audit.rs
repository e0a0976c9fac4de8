//! Capability audit
//!
//! Capabilities are advisory and never enforced while planning. This module
//! offers an opt-in check, run on demand against a set of sample states,
//! that compares what a checker advertises with what it returns.
//!
//! # Rules
//!
//! | Rule | Meaning |
//! |------|---------|
//! | `ConflictingClearanceKinds` | exact clearance advertised together with unbounded approximate clearance |
//! | `GradientNeverAvailable` | gradient advertised, no sample produced one |
//! | `GradientUnadvertised` | a sample produced a gradient without the flag |
//! | `ClearanceAlwaysZero` | clearance advertised, every sample reported `0.0` |
//! | `InconsistentValidity` | a richer query disagreed with `is_valid` |
//!
//! ```rust
//! use freespace_core::{RealVectorBounds, RealVectorState, SpaceInformation};
//! use freespace_validity::{audit_capabilities, AllValidChecker};
//!
//! let si = SpaceInformation::real_vector(RealVectorBounds::uniform(2, 0.0, 1.0).unwrap());
//! let checker = AllValidChecker::new(&si);
//! let samples = [RealVectorState::new(vec![0.5, 0.5])];
//!
//! assert!(audit_capabilities(&checker, &samples).is_empty());
//! ```

use std::fmt;

use tracing::warn;

use crate::{StateOf, StateValidityChecker};

/// A single audit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditRule {
    ConflictingClearanceKinds,
    GradientNeverAvailable,
    GradientUnadvertised,
    ClearanceAlwaysZero,
    InconsistentValidity,
}

impl AuditRule {
    pub fn name(&self) -> &'static str {
        match self {
            AuditRule::ConflictingClearanceKinds => "conflicting clearance kinds",
            AuditRule::GradientNeverAvailable => "gradient never available",
            AuditRule::GradientUnadvertised => "gradient unadvertised",
            AuditRule::ClearanceAlwaysZero => "clearance always zero",
            AuditRule::InconsistentValidity => "inconsistent validity",
        }
    }
}

impl fmt::Display for AuditRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A capability mismatch found by the audit
#[derive(Debug, Clone, PartialEq)]
pub struct CapabilityViolation {
    pub rule: AuditRule,
    pub context: String,
}

impl fmt::Display for CapabilityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability violation: {} - {}", self.rule, self.context)
    }
}

impl std::error::Error for CapabilityViolation {}

/// Compare a checker's advertised capabilities with its answers at `samples`.
///
/// Each violation is logged at `warn` level and returned. An empty sample set
/// only runs the descriptor rule.
pub fn audit_capabilities<C>(checker: &C, samples: &[StateOf<C::Space>]) -> Vec<CapabilityViolation>
where
    C: StateValidityChecker + ?Sized,
{
    let caps = *checker.capabilities();
    let mut violations = Vec::new();

    // An exact distance is trivially a bounded approximation of itself
    if caps.has_exact_clearance && caps.has_approximate_clearance {
        violations.push(CapabilityViolation {
            rule: AuditRule::ConflictingClearanceKinds,
            context: format!("advertised: {}", caps),
        });
    }

    let mut any_gradient = false;
    let mut any_nonzero_clearance = false;

    for (index, state) in samples.iter().enumerate() {
        let valid = checker.is_valid(state);
        let (valid_with_clearance, distance) = checker.is_valid_with_clearance(state);
        let mut gradient = checker.space_information().alloc_state();
        let report = checker.is_valid_with_gradient(state, &mut gradient);

        if valid_with_clearance != valid || report.valid != valid {
            violations.push(CapabilityViolation {
                rule: AuditRule::InconsistentValidity,
                context: format!(
                    "sample {}: is_valid {}, with clearance {}, with gradient {}",
                    index, valid, valid_with_clearance, report.valid
                ),
            });
        }

        if distance != 0.0 || report.clearance != 0.0 {
            any_nonzero_clearance = true;
        }

        if report.gradient_available {
            any_gradient = true;
            if !caps.has_gradient_computation {
                violations.push(CapabilityViolation {
                    rule: AuditRule::GradientUnadvertised,
                    context: format!("sample {} produced a gradient", index),
                });
            }
        }
    }

    if !samples.is_empty() {
        if caps.has_gradient_computation && !any_gradient {
            violations.push(CapabilityViolation {
                rule: AuditRule::GradientNeverAvailable,
                context: format!("{} samples, no gradient", samples.len()),
            });
        }
        if caps.has_clearance() && !any_nonzero_clearance {
            violations.push(CapabilityViolation {
                rule: AuditRule::ClearanceAlwaysZero,
                context: format!("{} samples, advertised: {}", samples.len(), caps),
            });
        }
    }

    for violation in &violations {
        warn!(rule = %violation.rule, context = %violation.context, "capability audit");
    }

    violations
}
