//! Model calibration: technology, preferences and the productivity process.

use crate::error::CalibrationError;
use crate::process::{ProductivityProcess, normalize_rows};
use crate::steady_state::{SteadyState, check_discount, check_elasticity, steady_state};

/// Productivity levels of the reference five-state process.
pub const REFERENCE_PRODUCTIVITY: [f64; 5] = [0.9792, 0.9896, 1.0000, 1.0106, 1.0212];

/// Transition matrix of the reference five-state process, as published.
///
/// The entries are rounded to four digits, so the middle row sums to
/// 1.0001. Use [`reference_transition`] for the row-normalized matrix.
pub const REFERENCE_TRANSITION: [[f64; 5]; 5] = [
    [0.9727, 0.0273, 0.0000, 0.0000, 0.0000],
    [0.0041, 0.9806, 0.0153, 0.0000, 0.0000],
    [0.0000, 0.0082, 0.9837, 0.0082, 0.0000],
    [0.0000, 0.0000, 0.0153, 0.9806, 0.0041],
    [0.0000, 0.0000, 0.0000, 0.0273, 0.9727],
];

/// Reference capital elasticity of output.
pub const REFERENCE_ELASTICITY: f64 = 1.0 / 3.0;

/// Reference discount factor.
pub const REFERENCE_DISCOUNT: f64 = 0.95;

/// A validated calibration of the RBC model.
///
/// # Example
///
/// ```
/// use rbc_calibration::Calibration;
///
/// let cal = Calibration::reference().unwrap();
/// let ss = cal.steady_state();
/// assert!((ss.output() - ss.consumption() - ss.capital()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    elasticity: f64,
    discount: f64,
    process: ProductivityProcess,
}

impl Calibration {
    /// Creates a calibration after validating both scalar parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidElasticity`] or
    /// [`CalibrationError::InvalidDiscount`] when a parameter lies outside
    /// the open interval (0, 1).
    pub fn new(
        elasticity: f64,
        discount: f64,
        process: ProductivityProcess,
    ) -> Result<Self, CalibrationError> {
        check_elasticity(elasticity)?;
        check_discount(discount)?;
        Ok(Self {
            elasticity,
            discount,
            process,
        })
    }

    /// The five-state reference calibration (alpha = 1/3, beta = 0.95),
    /// using the row-normalized [`reference_transition`].
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] only if the compiled-in literals are
    /// invalid.
    pub fn reference() -> Result<Self, CalibrationError> {
        let process =
            ProductivityProcess::new(REFERENCE_PRODUCTIVITY.to_vec(), &reference_transition()?)?;
        Self::new(REFERENCE_ELASTICITY, REFERENCE_DISCOUNT, process)
    }

    /// Returns the capital elasticity of output.
    pub fn elasticity(&self) -> f64 {
        self.elasticity
    }

    /// Returns the discount factor.
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the productivity process.
    pub fn process(&self) -> &ProductivityProcess {
        &self.process
    }

    /// Returns the deterministic steady state.
    pub fn steady_state(&self) -> SteadyState {
        // Parameters were range-checked on construction.
        match steady_state(self.elasticity, self.discount) {
            Ok(ss) => ss,
            Err(e) => unreachable!("validated calibration rejected: {e}"),
        }
    }
}

/// [`REFERENCE_TRANSITION`] with every row rescaled to sum to one.
///
/// # Errors
///
/// Returns [`CalibrationError::RowSumMismatch`] only if a literal row sums
/// to zero.
pub fn reference_transition() -> Result<Vec<Vec<f64>>, CalibrationError> {
    let rows: Vec<Vec<f64>> = REFERENCE_TRANSITION.iter().map(|r| r.to_vec()).collect();
    normalize_rows(&rows)
}
