//! Axis-aligned bounds for real vector spaces

use crate::{FreespaceError, FreespaceResult};

/// Per-axis inclusive bounds
#[derive(Clone, Debug, PartialEq)]
pub struct RealVectorBounds {
    low: Vec<f64>,
    high: Vec<f64>,
}

impl RealVectorBounds {
    /// Build bounds from per-axis low and high values.
    ///
    /// Every axis must satisfy `low <= high` with finite values.
    pub fn new(low: Vec<f64>, high: Vec<f64>) -> FreespaceResult<Self> {
        if low.len() != high.len() {
            return Err(FreespaceError::DimensionMismatch {
                expected: low.len(),
                actual: high.len(),
            });
        }
        if low.is_empty() {
            return Err(FreespaceError::EmptySpace);
        }

        for (axis, (&l, &h)) in low.iter().zip(&high).enumerate() {
            if !l.is_finite() || !h.is_finite() || l > h {
                return Err(FreespaceError::InvalidBounds {
                    axis,
                    low: l,
                    high: h,
                });
            }
        }

        Ok(RealVectorBounds { low, high })
    }

    /// Same bounds on every axis
    pub fn uniform(dimension: usize, low: f64, high: f64) -> FreespaceResult<Self> {
        RealVectorBounds::new(vec![low; dimension], vec![high; dimension])
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.low.len()
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    /// Check whether a point lies inside (boundary included).
    ///
    /// Points of the wrong dimension are never contained.
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.dimension()
            && values
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(v, (l, h))| *v >= *l && *v <= *h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains() {
        let bounds = RealVectorBounds::uniform(2, -1.0, 1.0).unwrap();
        assert!(bounds.contains(&[0.0, 0.0]));
        assert!(bounds.contains(&[1.0, -1.0]));
        assert!(!bounds.contains(&[1.5, 0.0]));
        assert!(!bounds.contains(&[0.0]));
        assert!(!bounds.contains(&[f64::NAN, 0.0]));
    }

    #[test]
    fn test_bounds_rejects_inverted_axis() {
        let err = RealVectorBounds::new(vec![0.0, 2.0], vec![1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            FreespaceError::InvalidBounds {
                axis: 1,
                low: 2.0,
                high: 1.0
            }
        );
    }

    #[test]
    fn test_bounds_rejects_mismatch_and_empty() {
        assert!(matches!(
            RealVectorBounds::new(vec![0.0], vec![1.0, 1.0]),
            Err(FreespaceError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
        assert_eq!(
            RealVectorBounds::new(vec![], vec![]),
            Err(FreespaceError::EmptySpace)
        );
        assert!(RealVectorBounds::uniform(2, 0.0, f64::INFINITY).is_err());
    }
}
