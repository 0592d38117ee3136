//! Text and JSON reporting of a finished run.

use std::path::Path;

use anyhow::{Context, Result};
use rbc_calibration::SteadyState;
use rbc_vfi::{Model, VfiSolution};
use serde::Serialize;

/// Scalars describing one solve, written as JSON by `--summary`.
#[derive(Debug, Serialize)]
pub struct SolveSummary {
    pub elasticity: f64,
    pub discount: f64,
    pub steady_state: SteadyStateSummary,
    pub n_capital: usize,
    pub n_productivity: usize,
    pub iterations: usize,
    pub sup_diff: f64,
    pub tolerance: f64,
    pub check: CheckValue,
    pub hits_upper_bound: bool,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Serialize)]
pub struct SteadyStateSummary {
    pub capital: f64,
    pub output: f64,
    pub consumption: f64,
}

impl From<&SteadyState> for SteadyStateSummary {
    fn from(ss: &SteadyState) -> Self {
        Self {
            capital: ss.capital(),
            output: ss.output(),
            consumption: ss.consumption(),
        }
    }
}

/// The policy at one reported state.
#[derive(Debug, Serialize)]
pub struct CheckValue {
    pub capital_index: usize,
    pub productivity_index: usize,
    pub capital: f64,
    pub productivity: f64,
    pub policy: f64,
}

impl SolveSummary {
    /// Collects the summary; the check indices must already be in range.
    pub fn new(
        model: &Model,
        solution: &VfiSolution,
        tolerance: f64,
        check: (usize, usize),
        elapsed_seconds: f64,
    ) -> Self {
        let (n_capital, n_productivity) = model.shape();
        let (k, z) = check;
        let cal = model.calibration();
        Self {
            elasticity: cal.elasticity(),
            discount: cal.discount(),
            steady_state: model.steady_state().into(),
            n_capital,
            n_productivity,
            iterations: solution.iterations(),
            sup_diff: solution.sup_diff(),
            tolerance,
            check: CheckValue {
                capital_index: k,
                productivity_index: z,
                capital: model.grid().value(k),
                productivity: cal.process().levels()[z],
                policy: solution.policy_at(k, z),
            },
            hits_upper_bound: solution.hits_upper_bound(),
            elapsed_seconds,
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize summary")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary: {}", path.display()))
    }
}

/// Formats the steady state block printed by both subcommands.
pub fn format_steady_state(ss: &SteadyStateSummary) -> String {
    format!(
        "Steady state\n  capital      {:.10}\n  output       {:.10}\n  consumption  {:.10}\n",
        ss.capital, ss.output, ss.consumption
    )
}

/// Formats the result block printed after a converged solve.
pub fn format_solution(summary: &SolveSummary) -> String {
    let check = &summary.check;
    let mut out = format_steady_state(&summary.steady_state);
    out.push_str(&format!(
        "Grid          {} x {}\nIterations    {}\nSup diff      {:e}\nPolicy[{}, {}] {:.16}\nElapsed       {:.3} s\n",
        summary.n_capital,
        summary.n_productivity,
        summary.iterations,
        summary.sup_diff,
        check.capital_index,
        check.productivity_index,
        check.policy,
        summary.elapsed_seconds,
    ));
    if summary.hits_upper_bound {
        out.push_str("Warning: policy reaches the top of the capital grid\n");
    }
    out
}
