//! State definitions
//!
//! A state is one configuration of the system being planned over. Validity
//! checkers only ever borrow states; the coordinates are read by concrete
//! checkers, never by the validity contract itself.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Point in a flat real vector space
///
/// The same type doubles as a tangent-space element (e.g. a gradient buffer),
/// since the tangent space of R^n is R^n.
#[derive(Clone, PartialEq, Default)]
pub struct RealVectorState {
    values: Vec<f64>,
}

impl RealVectorState {
    pub fn new(values: Vec<f64>) -> Self {
        RealVectorState { values }
    }

    /// All-zero state of the given dimension
    pub fn zeros(dimension: usize) -> Self {
        RealVectorState {
            values: vec![0.0; dimension],
        }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Euclidean distance to another state of the same dimension
    pub fn distance(&self, other: &RealVectorState) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<Vec<f64>> for RealVectorState {
    fn from(values: Vec<f64>) -> Self {
        RealVectorState::new(values)
    }
}

impl Index<usize> for RealVectorState {
    type Output = f64;

    fn index(&self, axis: usize) -> &f64 {
        &self.values[axis]
    }
}

impl IndexMut<usize> for RealVectorState {
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.values[axis]
    }
}

impl fmt::Debug for RealVectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State{:?}", self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let s = RealVectorState::zeros(3);
        assert_eq!(s.dimension(), 3);
        assert!(s.values().iter().all(|v| *v == 0.0));
        assert_eq!(s.norm(), 0.0);
    }

    #[test]
    fn test_norm_and_distance() {
        let a = RealVectorState::new(vec![3.0, 4.0]);
        let b = RealVectorState::zeros(2);
        assert!((a.norm() - 5.0).abs() < 1e-12);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_index_mut() {
        let mut s = RealVectorState::zeros(2);
        s[1] = 2.5;
        assert_eq!(s[1], 2.5);
        assert_eq!(format!("{:?}", s), "State[0.0, 2.5]");
    }
}
