//! Price surfaces over spot and volatility, and one-dimensional parameter sweeps,
//! built by repeated evaluation of the closed-form prices in [`pricing`].
//!
//! Every cell is an independent evaluation. With the `parallel` feature the cells
//! are fanned out over the rayon thread pool; the results are identical.

pub mod axis;
pub mod config;
pub mod grid;
pub mod sweep;

pub use config::{GridConfig, RangeFactors, SweepConfig};
pub use grid::{compute_grid, GridEvaluator, GridResult};
pub use sweep::{compute_sweep, SweepAxis, SweepResult};
