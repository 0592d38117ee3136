//! # rbc-vfi
//!
//! Value-function iteration for the RBC model with full depreciation.
//!
//! ## Solver Pipeline
//!
//! ```text
//!  ┌───────────┐     ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//!  │   Model   │────▶│ expectation  │────▶│ maximization  │────▶│ sup-norm    │
//!  │ (grid, y) │     │ E[V(k', z')] │     │ monotone scan │     │ & swap      │
//!  └───────────┘     └──────────────┘     └───────────────┘     └─────────────┘
//!                           ▲                                          │
//!                           └──────────── until diff <= tol ───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use rbc_calibration::Calibration;
//! use rbc_grid::GridSpec;
//! use rbc_vfi::{Model, VfiConfig, solve};
//!
//! let spec = GridSpec::Offset { n_points: 50, step: 0.002, lower_factor: 0.5 };
//! let model = Model::new(Calibration::reference().unwrap(), &spec).unwrap();
//! let solution = solve(&model, &VfiConfig::new().with_tolerance(1e-6)).unwrap();
//! assert!(solution.sup_diff() <= 1e-6);
//! ```

mod bellman;
mod config;
mod error;
mod model;
mod solution;
mod solver;
mod table;

pub use bellman::expectation_step;
pub use config::VfiConfig;
pub use error::VfiError;
pub use model::Model;
pub use solution::VfiSolution;
pub use solver::{solve, solve_from};
pub use table::{StateTable, sup_norm};
