//! Error types for Freespace

use thiserror::Error;

/// Core Freespace errors
///
/// Validity outcomes are never errors. These cover malformed configuration of
/// spaces and environments, reported when they are built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FreespaceError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid bounds on axis {axis}: low {low}, high {high}")]
    InvalidBounds { axis: usize, low: f64, high: f64 },

    #[error("Space has zero dimensions")]
    EmptySpace,

    #[error("Invalid obstacle: {0}")]
    InvalidObstacle(String),
}

/// Result type for Freespace operations
pub type FreespaceResult<T> = Result<T, FreespaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FreespaceError::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 3, got 2");

        let err = FreespaceError::InvalidBounds {
            axis: 1,
            low: 2.0,
            high: -1.0,
        };
        assert!(err.to_string().contains("axis 1"));
    }
}
