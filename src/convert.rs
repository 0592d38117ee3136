//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use rbc_calibration::{Calibration, ProductivityProcess};
use rbc_grid::GridSpec;
use rbc_vfi::VfiConfig;

/// Builds a validated [`Calibration`] from the TOML calibration section.
pub fn build_calibration(cal: &CalibrationToml) -> Result<Calibration> {
    let process = ProductivityProcess::new(cal.productivity.clone(), &cal.transition)
        .context("invalid productivity process")?;
    Calibration::new(cal.elasticity, cal.discount, process).context("invalid calibration")
}

/// Builds a [`GridSpec`] from the TOML grid section.
pub fn build_grid_spec(grid: &GridToml) -> Result<GridSpec> {
    match grid.kind.to_lowercase().as_str() {
        "offset" => Ok(GridSpec::Offset {
            n_points: grid.n_points,
            step: grid.step,
            lower_factor: grid.lower_factor,
        }),
        "span" => Ok(GridSpec::Span {
            step: grid.step,
            lower_factor: grid.lower_factor,
            upper_factor: grid.upper_factor,
        }),
        other => bail!("unknown grid kind: {other:?}"),
    }
}

/// Builds a [`VfiConfig`] from the TOML solver section.
pub fn build_vfi_config(solver: &SolverToml) -> VfiConfig {
    VfiConfig::new()
        .with_tolerance(solver.tolerance)
        .with_max_iterations(solver.max_iterations)
        .with_report_every(solver.report_every)
        .with_parallel(solver.parallel)
}
