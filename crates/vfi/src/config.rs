//! Configuration for the value-function iteration loop.

use crate::error::VfiError;

/// Configuration for [`solve`](crate::solve).
///
/// # Example
///
/// ```
/// use rbc_vfi::VfiConfig;
///
/// let config = VfiConfig::new()
///     .with_tolerance(1e-6)
///     .with_max_iterations(500)
///     .with_parallel(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VfiConfig {
    tolerance: f64,
    max_iterations: usize,
    report_every: usize,
    parallel: bool,
}

impl VfiConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `tolerance = 1e-7`, `max_iterations = 10_000`,
    /// `report_every = 10`, `parallel = false`.
    pub fn new() -> Self {
        Self {
            tolerance: 1e-7,
            max_iterations: 10_000,
            report_every: 10,
            parallel: false,
        }
    }

    /// Sets the sup-norm convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of sweeps before giving up.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the progress logging interval (0 disables periodic progress).
    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    /// Enables evaluating productivity states in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the convergence tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the progress logging interval.
    pub fn report_every(&self) -> usize {
        self.report_every
    }

    /// Returns whether sweeps run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration.
    ///
    /// The tolerance must be finite and positive and the iteration cap at
    /// least one.
    pub fn validate(&self) -> Result<(), VfiError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(VfiError::InvalidConfig {
                reason: format!(
                    "tolerance must be finite and positive, got {}",
                    self.tolerance
                ),
            });
        }
        if self.max_iterations == 0 {
            return Err(VfiError::InvalidConfig {
                reason: "max_iterations must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for VfiConfig {
    fn default() -> Self {
        Self::new()
    }
}
