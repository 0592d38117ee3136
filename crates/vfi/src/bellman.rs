//! One application of the Bellman operator.
//!
//! A sweep runs in two phases. The expectation step integrates the current
//! value function over next-period productivity. The maximization step then
//! picks, for every (capital, productivity) state, the next-period capital
//! maximizing
//!
//! ```text
//! (1 - beta) * ln(output[k, z] - grid[k']) + beta * expected[k', z]
//! ```
//!
//! Both phases treat productivity columns independently, which is what lets
//! them run in parallel.

use rayon::prelude::*;
use rbc_calibration::TransitionMatrix;

use crate::error::VfiError;
use crate::model::Model;
use crate::table::StateTable;

/// Fills `expected[k, z] = sum_z' P[z, z'] * value[k, z']`.
pub fn expectation_step(
    transition: &TransitionMatrix,
    value: &StateTable,
    expected: &mut StateTable,
    parallel: bool,
) {
    debug_assert_eq!(value.shape(), expected.shape());
    if parallel {
        expected
            .par_columns_mut()
            .enumerate()
            .for_each(|(z, col)| expect_column(transition.row(z), value, col));
    } else {
        for (z, col) in expected.columns_mut().enumerate() {
            expect_column(transition.row(z), value, col);
        }
    }
}

fn expect_column(probs: &[f64], value: &StateTable, out: &mut [f64]) {
    out.fill(0.0);
    for (z_next, &p) in probs.iter().enumerate() {
        if p == 0.0 {
            continue;
        }
        for (e, &v) in out.iter_mut().zip(value.column(z_next)) {
            *e += p * v;
        }
    }
}

/// Inputs shared read-only by every column of a maximization step.
#[derive(Clone, Copy)]
pub(crate) struct ColumnInputs<'a> {
    pub(crate) grid: &'a [f64],
    pub(crate) output: &'a [f64],
    pub(crate) expected: &'a [f64],
    pub(crate) discount: f64,
    pub(crate) productivity_index: usize,
}

/// Output slices owned by one productivity column.
pub(crate) struct ColumnOutputs<'a> {
    pub(crate) value: &'a mut [f64],
    pub(crate) policy: &'a mut [f64],
    pub(crate) policy_index: &'a mut [usize],
}

/// Maximizes the Bellman right-hand side for one productivity column.
///
/// The objective is concave in the candidate index `k'`, so scanning upward
/// it rises then falls and the first non-improving candidate ends the scan.
/// The optimal policy is non-decreasing in `k`, so the scan for `k + 1`
/// starts at the arg-max found for `k`. The search floor resets to 0 per
/// column, giving O(K) amortized work instead of O(K^2).
///
/// Returns whether any state chose the top of the grid.
pub(crate) fn maximize_column(
    inputs: ColumnInputs<'_>,
    out: ColumnOutputs<'_>,
) -> Result<bool, VfiError> {
    let ColumnInputs {
        grid,
        output,
        expected,
        discount,
        productivity_index,
    } = inputs;
    let n = grid.len();
    let weight = 1.0 - discount;
    let mut floor = 0;
    let mut hits_upper = false;

    for k in 0..n {
        let y = output[k];
        let mut best = f64::NEG_INFINITY;
        let mut arg_best = None;

        for k_next in floor..n {
            let consumption = y - grid[k_next];
            if consumption <= 0.0 {
                // Grid is increasing; every later candidate is infeasible too.
                break;
            }
            let candidate = weight * consumption.ln() + discount * expected[k_next];
            if candidate > best {
                best = candidate;
                arg_best = Some(k_next);
            } else {
                break;
            }
        }

        let Some(choice) = arg_best else {
            return Err(VfiError::NoFeasibleChoice {
                capital_index: k,
                productivity_index,
            });
        };
        floor = choice;
        hits_upper |= choice + 1 == n;
        out.value[k] = best;
        out.policy[k] = grid[choice];
        out.policy_index[k] = choice;
    }

    Ok(hits_upper)
}

/// Buffers rewritten by every sweep.
pub(crate) struct SweepBuffers {
    pub(crate) expected: StateTable,
    pub(crate) next: StateTable,
    pub(crate) policy: StateTable,
    pub(crate) policy_index: Vec<usize>,
}

impl SweepBuffers {
    pub(crate) fn new(n_capital: usize, n_productivity: usize) -> Self {
        Self {
            expected: StateTable::zeros(n_capital, n_productivity),
            next: StateTable::zeros(n_capital, n_productivity),
            policy: StateTable::zeros(n_capital, n_productivity),
            policy_index: vec![0; n_capital * n_productivity],
        }
    }
}

/// Applies the Bellman operator to `current`, writing into `buffers.next`.
///
/// `current` is only read, so the expectation step never sees a partially
/// updated value function. Returns whether any state chose the top of the
/// grid.
pub(crate) fn sweep(
    model: &Model,
    current: &StateTable,
    buffers: &mut SweepBuffers,
    parallel: bool,
) -> Result<bool, VfiError> {
    let calibration = model.calibration();
    let grid = model.grid().values();
    let production = model.production();
    let discount = calibration.discount();
    let n_capital = grid.len();

    expectation_step(
        calibration.process().transition(),
        current,
        &mut buffers.expected,
        parallel,
    );

    let expected = &buffers.expected;
    let inputs = |z: usize| ColumnInputs {
        grid,
        output: production.column(z),
        expected: expected.column(z),
        discount,
        productivity_index: z,
    };

    if parallel {
        let hits: Vec<bool> = buffers
            .next
            .par_columns_mut()
            .zip(buffers.policy.par_columns_mut())
            .zip(buffers.policy_index.par_chunks_exact_mut(n_capital))
            .enumerate()
            .map(|(z, ((value, policy), policy_index))| {
                maximize_column(
                    inputs(z),
                    ColumnOutputs {
                        value,
                        policy,
                        policy_index,
                    },
                )
            })
            .collect::<Result<_, _>>()?;
        Ok(hits.into_iter().any(|h| h))
    } else {
        let mut hits_upper = false;
        let columns = buffers
            .next
            .columns_mut()
            .zip(buffers.policy.columns_mut())
            .zip(buffers.policy_index.chunks_exact_mut(n_capital));
        for (z, ((value, policy), policy_index)) in columns.enumerate() {
            hits_upper |= maximize_column(
                inputs(z),
                ColumnOutputs {
                    value,
                    policy,
                    policy_index,
                },
            )?;
        }
        Ok(hits_upper)
    }
}
