//! Evenly spaced capital grid centered on the steady state.

use tracing::debug;

use crate::error::GridError;

/// How the capital grid is laid out around steady-state capital `k*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridSpec {
    /// `n_points` entries starting at `lower_factor * k*`, `step` apart.
    ///
    /// Entry `i` is `lower_factor * k* + step * i`.
    Offset {
        /// Number of grid points.
        n_points: usize,
        /// Distance between adjacent points.
        step: f64,
        /// Multiple of `k*` at which the grid starts.
        lower_factor: f64,
    },
    /// Half-open interval `[lower_factor * k*, upper_factor * k*)` stepped by `step`.
    ///
    /// The point count is `ceil((upper - lower) / step)`.
    Span {
        /// Distance between adjacent points.
        step: f64,
        /// Multiple of `k*` at which the grid starts.
        lower_factor: f64,
        /// Multiple of `k*` at which the grid stops (exclusive).
        upper_factor: f64,
    },
}

impl GridSpec {
    /// Number of points in the reference offset grid.
    pub const REFERENCE_POINTS: usize = 17_820;

    /// Step of the reference grids.
    pub const REFERENCE_STEP: f64 = 0.00001;

    /// The default offset grid: 17820 points from `0.5 k*`, step `1e-5`.
    pub fn reference() -> Self {
        Self::Offset {
            n_points: Self::REFERENCE_POINTS,
            step: Self::REFERENCE_STEP,
            lower_factor: 0.5,
        }
    }

    /// The span grid `[0.5 k*, 1.5 k*)` with the reference step.
    pub fn reference_span() -> Self {
        Self::Span {
            step: Self::REFERENCE_STEP,
            lower_factor: 0.5,
            upper_factor: 1.5,
        }
    }

    fn step(&self) -> f64 {
        match *self {
            Self::Offset { step, .. } | Self::Span { step, .. } => step,
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::reference()
    }
}

/// An ordered, strictly increasing sequence of capital levels with a fixed step.
///
/// Elsewhere in the solver a capital level is only ever addressed by its
/// index into this grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalGrid {
    values: Vec<f64>,
    step: f64,
}

impl CapitalGrid {
    /// Largest number of points a grid may hold.
    pub const MAX_POINTS: usize = 10_000_000;

    /// Builds the grid around steady-state capital `capital_star`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if `capital_star` or the step is non-finite or
    /// non-positive, if the lower bound is not positive, if a span has
    /// `upper <= lower`, if the grid would be empty or longer than
    /// [`CapitalGrid::MAX_POINTS`], or if the step is too small to separate
    /// adjacent points in floating point.
    pub fn build(capital_star: f64, spec: &GridSpec) -> Result<Self, GridError> {
        if !capital_star.is_finite() || capital_star <= 0.0 {
            return Err(GridError::InvalidCenter {
                value: capital_star,
            });
        }
        let step = spec.step();
        if !step.is_finite() || step <= 0.0 {
            return Err(GridError::InvalidStep { value: step });
        }

        let (lower, n_points) = match *spec {
            GridSpec::Offset {
                n_points,
                lower_factor,
                ..
            } => {
                let lower = lower_factor * capital_star;
                let upper = lower + step * n_points.saturating_sub(1) as f64;
                if !lower.is_finite() || lower <= 0.0 {
                    return Err(GridError::InvalidBounds { lower, upper });
                }
                if n_points > Self::MAX_POINTS {
                    return Err(GridError::TooManyPoints {
                        requested: n_points as f64,
                        max: Self::MAX_POINTS,
                    });
                }
                (lower, n_points)
            }
            GridSpec::Span {
                lower_factor,
                upper_factor,
                ..
            } => {
                let lower = lower_factor * capital_star;
                let upper = upper_factor * capital_star;
                if !lower.is_finite() || !upper.is_finite() || lower <= 0.0 || upper <= lower {
                    return Err(GridError::InvalidBounds { lower, upper });
                }
                let count = ((upper - lower) / step).ceil();
                if count > Self::MAX_POINTS as f64 {
                    return Err(GridError::TooManyPoints {
                        requested: count,
                        max: Self::MAX_POINTS,
                    });
                }
                (lower, count as usize)
            }
        };
        if n_points == 0 {
            return Err(GridError::EmptyGrid);
        }

        let values: Vec<f64> = (0..n_points).map(|i| lower + step * i as f64).collect();
        if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(GridError::StepBelowResolution {
                step,
                index: index + 1,
                value: values[index],
            });
        }
        debug!(
            n_points,
            lower,
            upper = values[n_points - 1],
            step,
            "built capital grid"
        );
        Ok(Self { values, step })
    }

    /// Returns the number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the capital level at index `k`.
    pub fn value(&self, k: usize) -> f64 {
        self.values[k]
    }

    /// Returns all capital levels in increasing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the step between adjacent points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the smallest capital level.
    pub fn lower(&self) -> f64 {
        self.values[0]
    }

    /// Returns the largest capital level.
    pub fn upper(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}
