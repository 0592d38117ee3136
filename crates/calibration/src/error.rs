//! Error types for the rbc-calibration crate.

/// Error type for all fallible operations in the rbc-calibration crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CalibrationError {
    /// Returned when the capital elasticity is outside the open interval (0, 1).
    #[error("invalid elasticity: {value} (must be finite and in (0, 1))")]
    InvalidElasticity {
        /// The rejected elasticity.
        value: f64,
    },

    /// Returned when the discount factor is outside the open interval (0, 1).
    #[error("invalid discount factor: {value} (must be finite and in (0, 1))")]
    InvalidDiscount {
        /// The rejected discount factor.
        value: f64,
    },

    /// Returned when the productivity process has no states.
    #[error("productivity process has no states")]
    EmptyProductivity,

    /// Returned when a productivity level is non-finite or non-positive.
    #[error("invalid productivity level at index {index}: {value} (must be finite and > 0)")]
    InvalidProductivity {
        /// Zero-based state index.
        index: usize,
        /// The rejected level.
        value: f64,
    },

    /// Returned when the transition matrix shape does not match the number of states.
    #[error("transition matrix shape mismatch: expected {expected}x{expected}, row {row} has {got} entries")]
    ShapeMismatch {
        /// Expected number of rows and columns.
        expected: usize,
        /// Offending row (equal to `expected` when the row count itself is wrong).
        row: usize,
        /// Number of entries found.
        got: usize,
    },

    /// Returned when a transition probability is non-finite or outside [0, 1].
    #[error("invalid transition probability at [{row}][{col}]: {value} (must be in [0, 1])")]
    InvalidProbability {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// The rejected probability.
        value: f64,
    },

    /// Returned when a transition row does not sum to one.
    #[error("transition row {row} sums to {sum}, expected 1 within {tolerance:e}")]
    RowSumMismatch {
        /// Row index.
        row: usize,
        /// Actual row sum.
        sum: f64,
        /// Accepted absolute deviation.
        tolerance: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_elasticity() {
        let e = CalibrationError::InvalidElasticity { value: 1.5 };
        assert_eq!(
            e.to_string(),
            "invalid elasticity: 1.5 (must be finite and in (0, 1))"
        );
    }

    #[test]
    fn error_invalid_discount() {
        let e = CalibrationError::InvalidDiscount { value: -0.1 };
        assert_eq!(
            e.to_string(),
            "invalid discount factor: -0.1 (must be finite and in (0, 1))"
        );
    }

    #[test]
    fn error_empty_productivity() {
        let e = CalibrationError::EmptyProductivity;
        assert_eq!(e.to_string(), "productivity process has no states");
    }

    #[test]
    fn error_shape_mismatch() {
        let e = CalibrationError::ShapeMismatch {
            expected: 5,
            row: 2,
            got: 4,
        };
        assert_eq!(
            e.to_string(),
            "transition matrix shape mismatch: expected 5x5, row 2 has 4 entries"
        );
    }

    #[test]
    fn error_row_sum_mismatch() {
        let e = CalibrationError::RowSumMismatch {
            row: 1,
            sum: 0.5,
            tolerance: 1e-9,
        };
        assert_eq!(
            e.to_string(),
            "transition row 1 sums to 0.5, expected 1 within 1e-9"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalibrationError>();
    }
}
