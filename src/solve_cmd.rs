//! Solve and steady-state commands.

use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use rbc_vfi::{Model, solve};

use crate::cli::{SolveArgs, SteadyStateArgs};
use crate::config::RbcConfig;
use crate::convert;
use crate::report::{self, SolveSummary, SteadyStateSummary};

/// Run the full solve: build the model, iterate to convergence, report.
pub fn run(args: SolveArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();
    // 1. Load config, apply CLI overrides
    let mut config = RbcConfig::load(args.config.as_deref())?;
    if let Some(tol) = args.tolerance {
        config.solver.tolerance = tol;
    }
    if let Some(max) = args.max_iterations {
        config.solver.max_iterations = max;
    }
    config.solver.parallel |= args.parallel;

    // 2. Build the model
    let calibration = convert::build_calibration(&config.calibration)?;
    let spec = convert::build_grid_spec(&config.grid)?;
    let vfi_config = convert::build_vfi_config(&config.solver);
    let model = Model::new(calibration, &spec).context("failed to build model")?;

    let (n_capital, n_productivity) = model.shape();
    let check = (config.report.check_capital, config.report.check_productivity);
    if check.0 >= n_capital || check.1 >= n_productivity {
        bail!(
            "report state ({}, {}) outside the {n_capital} x {n_productivity} grid",
            check.0,
            check.1
        );
    }
    info!(n_capital, n_productivity, "model built");

    // 3. Iterate
    let start = Instant::now();
    let solution = solve(&model, &vfi_config).context("value function iteration failed")?;
    let elapsed = start.elapsed().as_secs_f64();

    // 4. Report
    let summary = SolveSummary::new(&model, &solution, vfi_config.tolerance(), check, elapsed);
    print!("{}", report::format_solution(&summary));
    if let Some(path) = &args.summary {
        summary.write_json(path)?;
        info!(path = %path.display(), "summary written");
    }

    Ok(())
}

/// Print the deterministic steady state of the configured calibration.
pub fn run_steady_state(args: SteadyStateArgs) -> Result<()> {
    let config = RbcConfig::load(args.config.as_deref())?;
    let calibration = convert::build_calibration(&config.calibration)?;
    let ss = calibration.steady_state();
    print!("{}", report::format_steady_state(&SteadyStateSummary::from(&ss)));
    Ok(())
}
