//! Dense K x N tables indexed by (capital, productivity).

use rayon::prelude::*;

use crate::error::VfiError;

/// A K x N matrix of `f64`, stored productivity-major.
///
/// Column `z` (every capital index at productivity state `z`) is the
/// contiguous slice `data[z * K..(z + 1) * K]`, so each productivity state
/// can be handed exclusive ownership of its column.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable {
    n_capital: usize,
    n_productivity: usize,
    data: Vec<f64>,
}

impl StateTable {
    /// Creates a table of zeros.
    pub fn zeros(n_capital: usize, n_productivity: usize) -> Self {
        Self::filled(n_capital, n_productivity, 0.0)
    }

    /// Creates a table with every entry set to `value`.
    pub fn filled(n_capital: usize, n_productivity: usize, value: f64) -> Self {
        Self {
            n_capital,
            n_productivity,
            data: vec![value; n_capital * n_productivity],
        }
    }

    /// Builds a table from one vector per productivity state.
    ///
    /// # Errors
    ///
    /// Returns [`VfiError::ShapeMismatch`] if the columns differ in length.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self, VfiError> {
        let n_productivity = columns.len();
        let n_capital = columns.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_capital * n_productivity);
        for col in columns {
            if col.len() != n_capital {
                return Err(VfiError::ShapeMismatch {
                    expected_capital: n_capital,
                    expected_productivity: n_productivity,
                    capital: col.len(),
                    productivity: n_productivity,
                });
            }
            data.extend(col);
        }
        Ok(Self {
            n_capital,
            n_productivity,
            data,
        })
    }

    /// Returns the number of capital points (rows).
    pub fn n_capital(&self) -> usize {
        self.n_capital
    }

    /// Returns the number of productivity states (columns).
    pub fn n_productivity(&self) -> usize {
        self.n_productivity
    }

    /// Returns `(n_capital, n_productivity)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_capital, self.n_productivity)
    }

    /// Returns the entry at capital index `k`, productivity index `z`.
    #[inline]
    pub fn get(&self, k: usize, z: usize) -> f64 {
        self.data[z * self.n_capital + k]
    }

    /// Sets the entry at capital index `k`, productivity index `z`.
    #[inline]
    pub fn set(&mut self, k: usize, z: usize, value: f64) {
        self.data[z * self.n_capital + k] = value;
    }

    /// Returns the column for productivity index `z`.
    pub fn column(&self, z: usize) -> &[f64] {
        &self.data[z * self.n_capital..(z + 1) * self.n_capital]
    }

    /// Returns the column for productivity index `z`, mutably.
    pub fn column_mut(&mut self, z: usize) -> &mut [f64] {
        &mut self.data[z * self.n_capital..(z + 1) * self.n_capital]
    }

    /// Iterates over the columns mutably, in productivity order.
    pub(crate) fn columns_mut(&mut self) -> std::slice::ChunksExactMut<'_, f64> {
        self.data.chunks_exact_mut(self.n_capital.max(1))
    }

    /// Parallel iterator over the columns, in productivity order.
    pub(crate) fn par_columns_mut(
        &mut self,
    ) -> impl IndexedParallelIterator<Item = &mut [f64]> + '_ {
        self.data.par_chunks_exact_mut(self.n_capital.max(1))
    }

    /// Returns the raw productivity-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Fails unless this table is `n_capital x n_productivity`.
    pub(crate) fn check_shape(&self, n_capital: usize, n_productivity: usize) -> Result<(), VfiError> {
        if self.shape() != (n_capital, n_productivity) {
            return Err(VfiError::ShapeMismatch {
                expected_capital: n_capital,
                expected_productivity: n_productivity,
                capital: self.n_capital,
                productivity: self.n_productivity,
            });
        }
        Ok(())
    }
}

/// Maximum absolute pointwise difference between two equally shaped tables.
///
/// Returns NaN if either table holds a NaN at a position where the other
/// does not mask it; callers treat a non-finite result as divergence.
pub fn sup_norm(a: &StateTable, b: &StateTable) -> f64 {
    debug_assert_eq!(a.shape(), b.shape());
    a.data
        .iter()
        .zip(&b.data)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |acc: f64, d| if d.is_nan() || d > acc { d } else { acc })
}
