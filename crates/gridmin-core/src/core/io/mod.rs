//! Provides input/output functionality for grid archives and extraction reports.
//!
//! Grids travel as NumPy `.npz` bundles holding three equal-shaped arrays named `x`, `y` and
//! `z`. Located minima are written out as CSV or rendered as a plain-text table.

pub mod npz;
pub mod report;
pub mod traits;
