//! Error types for the rbc-grid crate.

/// Error type for all fallible operations in the rbc-grid crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when the grid would contain no points.
    #[error("capital grid is empty")]
    EmptyGrid,

    /// Returned when the step size is non-finite or non-positive.
    #[error("invalid grid step: {value} (must be finite and > 0)")]
    InvalidStep {
        /// The rejected step.
        value: f64,
    },

    /// Returned when the centering capital level is non-finite or non-positive.
    #[error("invalid centering capital: {value} (must be finite and > 0)")]
    InvalidCenter {
        /// The rejected capital level.
        value: f64,
    },

    /// Returned when the grid bounds are inverted or not positive.
    #[error("invalid grid bounds: lower {lower}, upper {upper}")]
    InvalidBounds {
        /// Lower bound of the grid.
        lower: f64,
        /// Upper bound of the grid.
        upper: f64,
    },

    /// Returned when the grid would exceed the point limit.
    #[error("capital grid would hold {requested} points, limit is {max}")]
    TooManyPoints {
        /// Requested number of points.
        requested: f64,
        /// Largest allowed number of points.
        max: usize,
    },

    /// Returned when adding the step no longer increases the capital level.
    #[error("grid step {step} too small: point {index} does not exceed {value}")]
    StepBelowResolution {
        /// The rejected step.
        step: f64,
        /// First index that fails to increase.
        index: usize,
        /// Capital level of the preceding point.
        value: f64,
    },

    /// Returned when no productivity levels are supplied.
    #[error("no productivity levels supplied")]
    EmptyProductivity,

    /// Returned when the elasticity is outside (0, 1).
    #[error("invalid elasticity: {value} (must be finite and in (0, 1))")]
    InvalidElasticity {
        /// The rejected elasticity.
        value: f64,
    },
}
