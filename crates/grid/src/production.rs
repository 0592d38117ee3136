//! Output for every (capital, productivity) pair, computed once.

use crate::capital::CapitalGrid;
use crate::error::GridError;

/// K x N table of output values `z * k^alpha`.
///
/// Stored productivity-major: the column for productivity state `z` is the
/// contiguous slice `data[z * K..(z + 1) * K]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionTable {
    n_capital: usize,
    n_productivity: usize,
    data: Vec<f64>,
}

impl ProductionTable {
    /// Precomputes `output[k, z] = levels[z] * grid[k]^elasticity`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidElasticity`] unless `0 < elasticity < 1`
    /// and [`GridError::EmptyProductivity`] if `levels` is empty.
    pub fn precompute(
        grid: &CapitalGrid,
        levels: &[f64],
        elasticity: f64,
    ) -> Result<Self, GridError> {
        if !elasticity.is_finite() || elasticity <= 0.0 || elasticity >= 1.0 {
            return Err(GridError::InvalidElasticity { value: elasticity });
        }
        if levels.is_empty() {
            return Err(GridError::EmptyProductivity);
        }

        // k^alpha does not depend on z.
        let powered: Vec<f64> = grid.values().iter().map(|k| k.powf(elasticity)).collect();
        let mut data = Vec::with_capacity(powered.len() * levels.len());
        for &z in levels {
            data.extend(powered.iter().map(|&kp| z * kp));
        }

        Ok(Self {
            n_capital: grid.len(),
            n_productivity: levels.len(),
            data,
        })
    }

    /// Returns output at capital index `k` and productivity index `z`.
    pub fn output(&self, k: usize, z: usize) -> f64 {
        self.data[z * self.n_capital + k]
    }

    /// Returns output for every capital index at productivity index `z`.
    pub fn column(&self, z: usize) -> &[f64] {
        &self.data[z * self.n_capital..(z + 1) * self.n_capital]
    }

    /// Returns the number of capital grid points.
    pub fn n_capital(&self) -> usize {
        self.n_capital
    }

    /// Returns the number of productivity states.
    pub fn n_productivity(&self) -> usize {
        self.n_productivity
    }
}
