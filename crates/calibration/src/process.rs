//! Discretized productivity process: levels plus a row-stochastic transition matrix.

use crate::error::CalibrationError;

/// Absolute tolerance on transition row sums.
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// An N x N row-stochastic transition matrix, stored row-major.
///
/// Row `z` holds the probabilities of moving from state `z` to every state
/// `z'` next period.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a transition matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if the matrix is empty or not square, if
    /// any entry is non-finite or outside `[0, 1]`, or if a row does not sum
    /// to one within [`ROW_SUM_TOLERANCE`].
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, CalibrationError> {
        let n = rows.len();
        if n == 0 {
            return Err(CalibrationError::EmptyProductivity);
        }
        let mut probs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(CalibrationError::ShapeMismatch {
                    expected: n,
                    row: i,
                    got: row.len(),
                });
            }
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(CalibrationError::InvalidProbability {
                        row: i,
                        col: j,
                        value: p,
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(CalibrationError::RowSumMismatch {
                    row: i,
                    sum,
                    tolerance: ROW_SUM_TOLERANCE,
                });
            }
            probs.extend_from_slice(row);
        }
        Ok(Self { n, probs })
    }

    /// Builds a transition matrix after rescaling every row to sum to one.
    ///
    /// Meant for published matrices whose rounded entries leave a row sum
    /// slightly off one. Entries are still range-checked.
    ///
    /// # Errors
    ///
    /// As [`TransitionMatrix::new`]; a row whose sum is not finite and
    /// positive is reported as [`CalibrationError::RowSumMismatch`].
    pub fn normalized(rows: &[Vec<f64>]) -> Result<Self, CalibrationError> {
        Self::new(&normalize_rows(rows)?)
    }

    /// The 1 x 1 identity: a state that never leaves itself.
    pub fn identity_1x1() -> Self {
        Self {
            n: 1,
            probs: vec![1.0],
        }
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n
    }

    /// Returns the transition probabilities out of state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n_states()`.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.probs[from * self.n..(from + 1) * self.n]
    }

    /// Returns the probability of moving from `from` to `to`.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.probs[from * self.n + to]
    }

    /// Iterates over the rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.probs.chunks_exact(self.n)
    }
}

/// Rescales each row by its sum.
///
/// # Errors
///
/// Returns [`CalibrationError::RowSumMismatch`] for a row whose sum is not
/// finite and positive.
pub fn normalize_rows(rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, CalibrationError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let sum: f64 = row.iter().sum();
            if !sum.is_finite() || sum <= 0.0 {
                return Err(CalibrationError::RowSumMismatch {
                    row: i,
                    sum,
                    tolerance: ROW_SUM_TOLERANCE,
                });
            }
            Ok(row.iter().map(|p| p / sum).collect())
        })
        .collect()
}

/// Productivity levels together with their Markov transition matrix.
///
/// Immutable after construction; the number of levels always equals the
/// dimension of the transition matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityProcess {
    levels: Vec<f64>,
    transition: TransitionMatrix,
}

impl ProductivityProcess {
    /// Builds a process from levels and transition rows.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::EmptyProductivity`] for an empty level
    /// vector, [`CalibrationError::InvalidProductivity`] for a non-finite or
    /// non-positive level, and the [`TransitionMatrix::new`] errors for the
    /// matrix (including a dimension that differs from the level count).
    pub fn new(levels: Vec<f64>, transition: &[Vec<f64>]) -> Result<Self, CalibrationError> {
        if levels.is_empty() {
            return Err(CalibrationError::EmptyProductivity);
        }
        for (index, &value) in levels.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalibrationError::InvalidProductivity { index, value });
            }
        }
        if transition.len() != levels.len() {
            return Err(CalibrationError::ShapeMismatch {
                expected: levels.len(),
                row: levels.len(),
                got: transition.len(),
            });
        }
        let transition = TransitionMatrix::new(transition)?;
        Ok(Self { levels, transition })
    }

    /// Single-state process with transition `[[1]]`.
    ///
    /// Reduces the stochastic model to deterministic optimal growth.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError::InvalidProductivity`] if `level` is
    /// non-finite or non-positive.
    pub fn degenerate(level: f64) -> Result<Self, CalibrationError> {
        if !level.is_finite() || level <= 0.0 {
            return Err(CalibrationError::InvalidProductivity {
                index: 0,
                value: level,
            });
        }
        Ok(Self {
            levels: vec![level],
            transition: TransitionMatrix::identity_1x1(),
        })
    }

    /// Returns the productivity levels.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    /// Returns the transition matrix.
    pub fn transition(&self) -> &TransitionMatrix {
        &self.transition
    }

    /// Returns the number of productivity states.
    pub fn n_states(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state() -> Vec<Vec<f64>> {
        vec![vec![0.9, 0.1], vec![0.2, 0.8]]
    }

    #[test]
    fn new_valid_matrix() {
        let tm = TransitionMatrix::new(&two_state()).unwrap();
        assert_eq!(tm.n_states(), 2);
        assert_eq!(tm.row(1), &[0.2, 0.8]);
        assert!((tm.prob(0, 1) - 0.1).abs() < f64::EPSILON);
        assert_eq!(tm.rows().count(), 2);
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(
            TransitionMatrix::new(&[]),
            Err(CalibrationError::EmptyProductivity)
        ));
    }

    #[test]
    fn new_rejects_ragged_row() {
        let rows = vec![vec![0.5, 0.5], vec![1.0]];
        assert!(matches!(
            TransitionMatrix::new(&rows),
            Err(CalibrationError::ShapeMismatch {
                expected: 2,
                row: 1,
                got: 1
            })
        ));
    }

    #[test]
    fn new_rejects_bad_probability() {
        let rows = vec![vec![1.2, -0.2], vec![0.5, 0.5]];
        assert!(matches!(
            TransitionMatrix::new(&rows),
            Err(CalibrationError::InvalidProbability { row: 0, col: 0, .. })
        ));

        let rows = vec![vec![f64::NAN, 1.0], vec![0.5, 0.5]];
        assert!(TransitionMatrix::new(&rows).is_err());
    }

    #[test]
    fn new_rejects_row_sum() {
        let rows = vec![vec![0.5, 0.5], vec![0.5, 0.49]];
        assert!(matches!(
            TransitionMatrix::new(&rows),
            Err(CalibrationError::RowSumMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn row_sum_tolerance_boundary() {
        // Within 1e-9 is accepted, beyond it is not.
        let ok = vec![vec![0.5, 0.5 + 5e-10], vec![0.0, 1.0]];
        assert!(TransitionMatrix::new(&ok).is_ok());
        let bad = vec![vec![0.5, 0.5 + 5e-9], vec![0.0, 1.0]];
        assert!(TransitionMatrix::new(&bad).is_err());
    }

    #[test]
    fn normalized_rescales_rounded_rows() {
        let rows = vec![vec![0.0082, 0.9837, 0.0082], vec![0.5, 0.5, 0.0], vec![0.0, 0.0, 1.0]];
        assert!(TransitionMatrix::new(&rows).is_err());

        let tm = TransitionMatrix::normalized(&rows).unwrap();
        for row in tm.rows() {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
        assert!((tm.prob(0, 1) - 0.9837 / 1.0001).abs() < 1e-15);
        assert_eq!(tm.row(1), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn normalized_still_checks_entries() {
        let zero_row = vec![vec![0.0, 0.0], vec![0.5, 0.5]];
        assert!(matches!(
            TransitionMatrix::normalized(&zero_row),
            Err(CalibrationError::RowSumMismatch { row: 0, .. })
        ));
        let negative = vec![vec![1.5, -0.5], vec![0.5, 0.5]];
        assert!(matches!(
            TransitionMatrix::normalized(&negative),
            Err(CalibrationError::InvalidProbability { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn process_rejects_level_count_mismatch() {
        let err = ProductivityProcess::new(vec![1.0, 1.1, 1.2], &two_state()).unwrap_err();
        assert!(matches!(
            err,
            CalibrationError::ShapeMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }

    #[test]
    fn process_rejects_bad_level() {
        assert!(matches!(
            ProductivityProcess::new(vec![1.0, 0.0], &two_state()),
            Err(CalibrationError::InvalidProductivity { index: 1, .. })
        ));
        assert!(matches!(
            ProductivityProcess::new(vec![], &[]),
            Err(CalibrationError::EmptyProductivity)
        ));
    }

    #[test]
    fn degenerate_process() {
        let p = ProductivityProcess::degenerate(1.0).unwrap();
        assert_eq!(p.n_states(), 1);
        assert_eq!(p.transition().row(0), &[1.0]);
        assert!(ProductivityProcess::degenerate(-1.0).is_err());
    }
}
