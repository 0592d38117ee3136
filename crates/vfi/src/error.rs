//! Error types for the rbc-vfi crate.

use rbc_calibration::CalibrationError;
use rbc_grid::GridError;

/// Error type for all fallible operations in the rbc-vfi crate.
///
/// Covers configuration problems caught before iterating, numeric domain
/// failures inside a sweep, and exhaustion of the iteration cap.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VfiError {
    /// Calibration error.
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// Grid or production table error.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Returned when a solver setting is invalid.
    #[error("invalid solver config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a table does not have the model's K x N shape.
    #[error(
        "table shape mismatch: expected {expected_capital}x{expected_productivity}, got {capital}x{productivity}"
    )]
    ShapeMismatch {
        /// Expected number of capital points.
        expected_capital: usize,
        /// Expected number of productivity states.
        expected_productivity: usize,
        /// Actual number of capital points.
        capital: usize,
        /// Actual number of productivity states.
        productivity: usize,
    },

    /// Returned when even the lowest capital choice leaves no positive
    /// consumption at the lowest capital level.
    #[error(
        "grid admits no positive consumption in productivity state {productivity_index}: output {output} <= lowest capital {capital}"
    )]
    InfeasibleGrid {
        /// Productivity state without a feasible choice.
        productivity_index: usize,
        /// Output at the lowest capital level.
        output: f64,
        /// Lowest capital level on the grid.
        capital: f64,
    },

    /// Returned when no candidate yields positive consumption during a sweep.
    #[error("no feasible capital choice at capital index {capital_index}, productivity index {productivity_index}")]
    NoFeasibleChoice {
        /// Capital index of the failing state.
        capital_index: usize,
        /// Productivity index of the failing state.
        productivity_index: usize,
    },

    /// Returned when the sup-norm difference stops being finite.
    #[error("value function became non-finite at iteration {iteration}")]
    NonFiniteValue {
        /// Iteration at which the difference was non-finite.
        iteration: usize,
    },

    /// Returned when the iteration cap is reached before convergence.
    #[error(
        "no convergence after {iterations} iterations: sup diff {sup_diff:e} > tolerance {tolerance:e}"
    )]
    NotConverged {
        /// Number of sweeps performed.
        iterations: usize,
        /// Sup-norm difference of the last sweep.
        sup_diff: f64,
        /// Requested tolerance.
        tolerance: f64,
    },
}
