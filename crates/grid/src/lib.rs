//! # rbc-grid
//!
//! Discretization of the capital state for value-function iteration.
//!
//! ```text
//!  steady-state k*  ──▶  CapitalGrid::build  ──▶  ProductionTable::precompute
//! ```
//!
//! Two grid conventions are supported through [`GridSpec`]: a fixed number
//! of points offset from `0.5 k*` (the default), and a half-open span
//! `[0.5 k*, 1.5 k*)`. They differ slightly at the upper end, so converged
//! policies differ in the last digits; pick one and keep it fixed.
//!
//! ## Quick Start
//!
//! ```rust
//! use rbc_grid::{CapitalGrid, GridSpec, ProductionTable};
//!
//! let spec = GridSpec::Offset { n_points: 100, step: 0.001, lower_factor: 0.5 };
//! let grid = CapitalGrid::build(0.18, &spec).unwrap();
//! let table = ProductionTable::precompute(&grid, &[0.98, 1.0, 1.02], 1.0 / 3.0).unwrap();
//! assert_eq!(table.n_capital(), 100);
//! ```

mod capital;
mod error;
mod production;

pub use capital::{CapitalGrid, GridSpec};
pub use error::GridError;
pub use production::ProductionTable;
