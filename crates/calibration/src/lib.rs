//! Calibration of the Real Business Cycle model with full depreciation.
//!
//! This crate holds the model's primitives: the capital elasticity of
//! output, the discount factor, and a discretized productivity process
//! (levels plus a row-stochastic transition matrix). It also computes the
//! deterministic steady state used to center the capital grid.
//!
//! # Quick start
//!
//! ```rust
//! use rbc_calibration::{Calibration, ProductivityProcess};
//!
//! let process = ProductivityProcess::new(
//!     vec![0.95, 1.05],
//!     &[vec![0.9, 0.1], vec![0.1, 0.9]],
//! )
//! .unwrap();
//! let cal = Calibration::new(1.0 / 3.0, 0.95, process).unwrap();
//! assert!(cal.steady_state().capital() > 0.0);
//! ```

mod calibration;
mod error;
mod process;
mod steady_state;

pub use calibration::{
    Calibration, REFERENCE_DISCOUNT, REFERENCE_ELASTICITY, REFERENCE_PRODUCTIVITY,
    REFERENCE_TRANSITION, reference_transition,
};
pub use error::CalibrationError;
pub use process::{ProductivityProcess, ROW_SUM_TOLERANCE, TransitionMatrix, normalize_rows};
pub use steady_state::{SteadyState, steady_state};
