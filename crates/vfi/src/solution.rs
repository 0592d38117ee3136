//! Output type of a converged value-function iteration.

use crate::table::StateTable;

/// A converged value function with its policy.
///
/// The policy table holds next-period capital levels; `policy_index` holds
/// the matching grid indices in the same productivity-major layout.
#[derive(Debug, Clone)]
pub struct VfiSolution {
    value: StateTable,
    policy: StateTable,
    policy_index: Vec<usize>,
    history: Vec<f64>,
    hits_upper_bound: bool,
}

impl VfiSolution {
    /// Creates a new `VfiSolution` (crate-internal constructor).
    pub(crate) fn new(
        value: StateTable,
        policy: StateTable,
        policy_index: Vec<usize>,
        history: Vec<f64>,
        hits_upper_bound: bool,
    ) -> Self {
        Self {
            value,
            policy,
            policy_index,
            history,
            hits_upper_bound,
        }
    }

    /// Returns the converged value function.
    pub fn value(&self) -> &StateTable {
        &self.value
    }

    /// Returns the policy function (next-period capital levels).
    pub fn policy(&self) -> &StateTable {
        &self.policy
    }

    /// Returns the value at capital index `k`, productivity index `z`.
    pub fn value_at(&self, k: usize, z: usize) -> f64 {
        self.value.get(k, z)
    }

    /// Returns the chosen next-period capital at `(k, z)`.
    pub fn policy_at(&self, k: usize, z: usize) -> f64 {
        self.policy.get(k, z)
    }

    /// Returns the chosen next-period grid index at `(k, z)`.
    pub fn policy_index_at(&self, k: usize, z: usize) -> usize {
        self.policy_index[z * self.value.n_capital() + k]
    }

    /// Returns the policy grid indices for productivity index `z`.
    pub fn policy_index_column(&self, z: usize) -> &[usize] {
        let n = self.value.n_capital();
        &self.policy_index[z * n..(z + 1) * n]
    }

    /// Returns the number of sweeps performed.
    pub fn iterations(&self) -> usize {
        self.history.len()
    }

    /// Returns the sup-norm difference of the final sweep.
    pub fn sup_diff(&self) -> f64 {
        self.history.last().copied().unwrap_or(0.0)
    }

    /// Returns the sup-norm difference of every sweep, in order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Returns whether the final policy chose the top of the capital grid
    /// somewhere, meaning the grid may not bracket the optimum.
    pub fn hits_upper_bound(&self) -> bool {
        self.hits_upper_bound
    }

    /// Consumes the solution, returning `(value, policy)`.
    pub fn into_tables(self) -> (StateTable, StateTable) {
        (self.value, self.policy)
    }
}
