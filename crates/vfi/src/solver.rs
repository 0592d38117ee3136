//! The fixed-point loop: sweep, measure, swap, until the sup-norm settles.

use tracing::{debug, info, warn};

use crate::bellman::{SweepBuffers, sweep};
use crate::config::VfiConfig;
use crate::error::VfiError;
use crate::model::Model;
use crate::solution::VfiSolution;
use crate::table::{StateTable, sup_norm};

/// Solves the model by value-function iteration from a zero value function.
///
/// # Errors
///
/// Returns [`VfiError::InvalidConfig`] for an invalid configuration,
/// [`VfiError::NoFeasibleChoice`] or [`VfiError::NonFiniteValue`] on a
/// numeric domain failure, and [`VfiError::NotConverged`] when
/// `max_iterations` sweeps pass without reaching the tolerance.
pub fn solve(model: &Model, config: &VfiConfig) -> Result<VfiSolution, VfiError> {
    let (n_capital, n_productivity) = model.shape();
    solve_from(model, StateTable::zeros(n_capital, n_productivity), config)
}

/// Solves the model starting from a given value function.
///
/// Each sweep reads `current` and writes a separate buffer; the two are
/// swapped only after the sweep completes, so a sweep never observes its
/// own partial output.
///
/// # Errors
///
/// Returns [`VfiError::ShapeMismatch`] if `initial` is not K x N, plus the
/// errors of [`solve`].
#[tracing::instrument(skip_all, fields(
    n_capital = model.shape().0,
    n_productivity = model.shape().1,
    tolerance = config.tolerance(),
    parallel = config.parallel(),
))]
pub fn solve_from(
    model: &Model,
    initial: StateTable,
    config: &VfiConfig,
) -> Result<VfiSolution, VfiError> {
    config.validate()?;
    let (n_capital, n_productivity) = model.shape();
    initial.check_shape(n_capital, n_productivity)?;

    let mut current = initial;
    let mut buffers = SweepBuffers::new(n_capital, n_productivity);
    let mut history = Vec::new();
    let report_every = config.report_every();

    for iteration in 1..=config.max_iterations() {
        let hits_upper = sweep(model, &current, &mut buffers, config.parallel())?;
        let sup_diff = sup_norm(&current, &buffers.next);
        std::mem::swap(&mut current, &mut buffers.next);
        history.push(sup_diff);

        if !sup_diff.is_finite() {
            return Err(VfiError::NonFiniteValue { iteration });
        }
        if iteration == 1 || (report_every > 0 && iteration % report_every == 0) {
            info!(iteration, sup_diff, "value function iteration");
        } else {
            debug!(iteration, sup_diff, "sweep complete");
        }

        if sup_diff <= config.tolerance() {
            if hits_upper {
                warn!(
                    upper = model.grid().upper(),
                    "policy reaches the top of the capital grid; widen the grid"
                );
            }
            info!(iterations = iteration, sup_diff, "converged");
            return Ok(VfiSolution::new(
                current,
                buffers.policy,
                buffers.policy_index,
                history,
                hits_upper,
            ));
        }
    }

    Err(VfiError::NotConverged {
        iterations: config.max_iterations(),
        sup_diff: history.last().copied().unwrap_or(f64::INFINITY),
        tolerance: config.tolerance(),
    })
}
