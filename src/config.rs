use std::path::Path;

use anyhow::{Context, Result};
use rbc_calibration::{
    REFERENCE_DISCOUNT, REFERENCE_ELASTICITY, REFERENCE_PRODUCTIVITY, REFERENCE_TRANSITION,
    reference_transition,
};
use rbc_grid::GridSpec;
use serde::Deserialize;

/// Top-level RBC configuration.
///
/// Every section is optional; an empty file reproduces the reference model.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RbcConfig {
    /// Technology, preferences and the productivity process.
    #[serde(default)]
    pub calibration: CalibrationToml,

    /// Capital grid layout.
    #[serde(default)]
    pub grid: GridToml,

    /// Fixed-point loop settings.
    #[serde(default)]
    pub solver: SolverToml,

    /// Which state to print as the check value.
    #[serde(default)]
    pub report: ReportToml,
}

impl RbcConfig {
    /// Reads and parses a TOML file, or returns the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationToml {
    #[serde(default = "default_elasticity")]
    pub elasticity: f64,
    #[serde(default = "default_discount")]
    pub discount: f64,
    #[serde(default = "default_productivity")]
    pub productivity: Vec<f64>,
    #[serde(default = "default_transition")]
    pub transition: Vec<Vec<f64>>,
}

impl Default for CalibrationToml {
    fn default() -> Self {
        Self {
            elasticity: default_elasticity(),
            discount: default_discount(),
            productivity: default_productivity(),
            transition: default_transition(),
        }
    }
}

fn default_elasticity() -> f64 {
    REFERENCE_ELASTICITY
}
fn default_discount() -> f64 {
    REFERENCE_DISCOUNT
}
fn default_productivity() -> Vec<f64> {
    REFERENCE_PRODUCTIVITY.to_vec()
}
// Falls back to the published rows, which validation then reports.
fn default_transition() -> Vec<Vec<f64>> {
    reference_transition()
        .unwrap_or_else(|_| REFERENCE_TRANSITION.iter().map(|row| row.to_vec()).collect())
}

/// Grid layout: `kind` is `"offset"` (uses `n_points`) or `"span"` (uses `upper_factor`).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_grid_kind")]
    pub kind: String,
    #[serde(default = "default_n_points")]
    pub n_points: usize,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default = "default_lower_factor")]
    pub lower_factor: f64,
    #[serde(default = "default_upper_factor")]
    pub upper_factor: f64,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            kind: default_grid_kind(),
            n_points: default_n_points(),
            step: default_step(),
            lower_factor: default_lower_factor(),
            upper_factor: default_upper_factor(),
        }
    }
}

fn default_grid_kind() -> String {
    "offset".to_string()
}
fn default_n_points() -> usize {
    GridSpec::REFERENCE_POINTS
}
fn default_step() -> f64 {
    GridSpec::REFERENCE_STEP
}
fn default_lower_factor() -> f64 {
    0.5
}
fn default_upper_factor() -> f64 {
    1.5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverToml {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_report_every")]
    pub report_every: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for SolverToml {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            report_every: default_report_every(),
            parallel: false,
        }
    }
}

fn default_tolerance() -> f64 {
    1e-7
}
fn default_max_iterations() -> usize {
    10_000
}
fn default_report_every() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_check_capital")]
    pub check_capital: usize,
    #[serde(default = "default_check_productivity")]
    pub check_productivity: usize,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            check_capital: default_check_capital(),
            check_productivity: default_check_productivity(),
        }
    }
}

fn default_check_capital() -> usize {
    999
}
fn default_check_productivity() -> usize {
    2
}
