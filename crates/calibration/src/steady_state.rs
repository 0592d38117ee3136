//! Deterministic steady state of the full-depreciation growth model.

use crate::error::CalibrationError;

/// Steady-state capital, output and consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    capital: f64,
    output: f64,
    consumption: f64,
}

impl SteadyState {
    /// Returns steady-state capital.
    pub fn capital(&self) -> f64 {
        self.capital
    }

    /// Returns steady-state output.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Returns steady-state consumption.
    pub fn consumption(&self) -> f64 {
        self.consumption
    }
}

/// Computes the deterministic steady state in closed form.
///
/// With full depreciation and unit productivity:
///
/// ```text
/// capital*     = (alpha * beta)^(1 / (1 - alpha))
/// output*      = capital*^alpha
/// consumption* = output* - capital*
/// ```
///
/// # Errors
///
/// Returns [`CalibrationError::InvalidElasticity`] unless `0 < elasticity < 1`
/// and [`CalibrationError::InvalidDiscount`] unless `0 < discount < 1`.
pub fn steady_state(elasticity: f64, discount: f64) -> Result<SteadyState, CalibrationError> {
    check_elasticity(elasticity)?;
    check_discount(discount)?;

    let capital = (elasticity * discount).powf(1.0 / (1.0 - elasticity));
    let output = capital.powf(elasticity);
    Ok(SteadyState {
        capital,
        output,
        consumption: output - capital,
    })
}

pub(crate) fn check_elasticity(elasticity: f64) -> Result<(), CalibrationError> {
    if !elasticity.is_finite() || elasticity <= 0.0 || elasticity >= 1.0 {
        return Err(CalibrationError::InvalidElasticity { value: elasticity });
    }
    Ok(())
}

pub(crate) fn check_discount(discount: f64) -> Result<(), CalibrationError> {
    if !discount.is_finite() || discount <= 0.0 || discount >= 1.0 {
        return Err(CalibrationError::InvalidDiscount { value: discount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_values() {
        let ss = steady_state(1.0 / 3.0, 0.95).unwrap();
        // (0.95 / 3)^1.5
        assert_relative_eq!(ss.capital(), 0.178_198_287, epsilon = 1e-9);
        assert_relative_eq!(ss.output(), 0.562_731_434, epsilon = 1e-9);
        assert_relative_eq!(ss.consumption(), 0.384_533_146, epsilon = 1e-9);
    }

    #[test]
    fn resource_constraint_holds() {
        for &(alpha, beta) in &[(0.1, 0.5), (1.0 / 3.0, 0.95), (0.6, 0.99), (0.9, 0.1)] {
            let ss = steady_state(alpha, beta).unwrap();
            assert_relative_eq!(
                ss.output(),
                ss.consumption() + ss.capital(),
                max_relative = 1e-12
            );
            assert!(ss.capital() > 0.0);
            assert!(ss.consumption() > 0.0);
        }
    }

    #[test]
    fn rejects_elasticity_out_of_range() {
        for alpha in [0.0, 1.0, 1.5, -0.2, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                steady_state(alpha, 0.95),
                Err(CalibrationError::InvalidElasticity { .. })
            ));
        }
    }

    #[test]
    fn rejects_discount_out_of_range() {
        for beta in [0.0, 1.0, -0.5, f64::NAN] {
            assert!(matches!(
                steady_state(0.3, beta),
                Err(CalibrationError::InvalidDiscount { .. })
            ));
        }
    }
}
