//! Validity checker capabilities
//!
//! A checker advertises which optional queries it answers meaningfully:
//! - Exact clearance
//! - Bounded approximate clearance (a conservative lower bound)
//! - Approximate clearance (no bound direction guaranteed)
//! - Gradient computation (escape direction in the tangent space)
//!
//! Flags are advisory. Nothing checks them against what a checker actually
//! computes unless [`audit_capabilities`](crate::audit_capabilities) is run.

use std::fmt;

/// Capabilities a state validity checker may have
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValidityCapabilities {
    /// The checker computes the exact clearance of a state
    pub has_exact_clearance: bool,
    /// The reported clearance is a lower bound on the true clearance
    pub has_bounded_approximate_clearance: bool,
    /// The reported clearance is an approximation with no guaranteed bound
    pub has_approximate_clearance: bool,
    /// The checker can return a direction that moves a state away from invalidity
    pub has_gradient_computation: bool,
}

impl ValidityCapabilities {
    /// All flags cleared
    pub const NONE: ValidityCapabilities = ValidityCapabilities {
        has_exact_clearance: false,
        has_bounded_approximate_clearance: false,
        has_approximate_clearance: false,
        has_gradient_computation: false,
    };

    pub fn new() -> Self {
        ValidityCapabilities::NONE
    }

    pub fn with_exact_clearance(mut self) -> Self {
        self.has_exact_clearance = true;
        self
    }

    pub fn with_bounded_approximate_clearance(mut self) -> Self {
        self.has_bounded_approximate_clearance = true;
        self
    }

    pub fn with_approximate_clearance(mut self) -> Self {
        self.has_approximate_clearance = true;
        self
    }

    pub fn with_gradient_computation(mut self) -> Self {
        self.has_gradient_computation = true;
        self
    }

    /// Whether any kind of clearance is advertised
    #[inline]
    pub fn has_clearance(&self) -> bool {
        self.has_exact_clearance
            || self.has_bounded_approximate_clearance
            || self.has_approximate_clearance
    }

    fn flag_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.has_exact_clearance {
            names.push("exact-clearance");
        }
        if self.has_bounded_approximate_clearance {
            names.push("bounded-approximate-clearance");
        }
        if self.has_approximate_clearance {
            names.push("approximate-clearance");
        }
        if self.has_gradient_computation {
            names.push("gradient");
        }
        names
    }
}

impl fmt::Display for ValidityCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let caps = ValidityCapabilities::default();
        assert!(!caps.has_exact_clearance);
        assert!(!caps.has_bounded_approximate_clearance);
        assert!(!caps.has_approximate_clearance);
        assert!(!caps.has_gradient_computation);
        assert!(!caps.has_clearance());
        assert_eq!(caps, ValidityCapabilities::NONE);
        assert_eq!(caps, ValidityCapabilities::new());
    }

    #[test]
    fn test_builder_flags_are_independent() {
        let caps = ValidityCapabilities::new().with_gradient_computation();
        assert!(caps.has_gradient_computation);
        assert!(!caps.has_clearance());

        let caps = ValidityCapabilities::new().with_bounded_approximate_clearance();
        assert!(caps.has_clearance());
        assert!(!caps.has_exact_clearance);
    }

    #[test]
    fn test_display() {
        assert_eq!(ValidityCapabilities::NONE.to_string(), "none");
        let caps = ValidityCapabilities::new()
            .with_exact_clearance()
            .with_gradient_computation();
        assert_eq!(caps.to_string(), "exact-clearance, gradient");
    }
}
