//! The discretized model handed to the solver.

use rbc_calibration::{Calibration, SteadyState};
use rbc_grid::{CapitalGrid, GridSpec, ProductionTable};
use tracing::debug;

use crate::error::VfiError;

/// Calibration, capital grid and production table of one model instance.
///
/// Construction guarantees the tables agree in shape and that every
/// productivity state admits positive consumption at the lowest capital
/// level. Because output rises with capital, that single check covers
/// every state the monotone search can reach.
#[derive(Debug, Clone)]
pub struct Model {
    calibration: Calibration,
    steady_state: SteadyState,
    grid: CapitalGrid,
    production: ProductionTable,
}

impl Model {
    /// Builds the grid around the steady state and precomputes output.
    ///
    /// # Errors
    ///
    /// Returns [`VfiError::Grid`] for an invalid grid specification and
    /// [`VfiError::InfeasibleGrid`] when the grid admits no positive
    /// consumption for some productivity state.
    pub fn new(calibration: Calibration, spec: &GridSpec) -> Result<Self, VfiError> {
        let steady_state = calibration.steady_state();
        let grid = CapitalGrid::build(steady_state.capital(), spec)?;
        let production = ProductionTable::precompute(
            &grid,
            calibration.process().levels(),
            calibration.elasticity(),
        )?;
        Self::from_parts(calibration, grid, production)
    }

    /// Assembles a model from separately built parts.
    ///
    /// # Errors
    ///
    /// Returns [`VfiError::ShapeMismatch`] when the production table does not
    /// match the grid and process, and [`VfiError::InfeasibleGrid`] as in
    /// [`Model::new`].
    pub fn from_parts(
        calibration: Calibration,
        grid: CapitalGrid,
        production: ProductionTable,
    ) -> Result<Self, VfiError> {
        let n_productivity = calibration.process().n_states();
        if production.n_capital() != grid.len() || production.n_productivity() != n_productivity
        {
            return Err(VfiError::ShapeMismatch {
                expected_capital: grid.len(),
                expected_productivity: n_productivity,
                capital: production.n_capital(),
                productivity: production.n_productivity(),
            });
        }

        let lowest = grid.lower();
        for z in 0..n_productivity {
            let output = production.output(0, z);
            if output - lowest <= 0.0 {
                return Err(VfiError::InfeasibleGrid {
                    productivity_index: z,
                    output,
                    capital: lowest,
                });
            }
        }

        debug!(
            n_capital = grid.len(),
            n_productivity,
            lower = grid.lower(),
            upper = grid.upper(),
            "model assembled"
        );
        let steady_state = calibration.steady_state();
        Ok(Self {
            calibration,
            steady_state,
            grid,
            production,
        })
    }

    /// Returns the calibration.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Returns the deterministic steady state the grid is centered on.
    pub fn steady_state(&self) -> &SteadyState {
        &self.steady_state
    }

    /// Returns the capital grid.
    pub fn grid(&self) -> &CapitalGrid {
        &self.grid
    }

    /// Returns the production table.
    pub fn production(&self) -> &ProductionTable {
        &self.production
    }

    /// Returns `(n_capital, n_productivity)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.grid.len(), self.calibration.process().n_states())
    }
}
