use super::grid::{Grid, GridIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One located minimum.
///
/// Coordinates and value always come from the original grid, never from the masked working
/// field used during extraction. `rank` is the 0-based discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinimumRecord {
    pub rank: usize,
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl MinimumRecord {
    pub(crate) fn at(grid: &Grid, index: GridIndex, rank: usize) -> Self {
        let (x, y) = grid.coordinate(index);
        Self {
            rank,
            row: index.row,
            col: index.col,
            x,
            y,
            z: grid.value(index),
        }
    }

    /// Short marker label, e.g. `M0 (-0.56, 1.44, -146.70)`.
    pub fn label(&self) -> String {
        format!("M{} ({:.2}, {:.2}, {:.2})", self.rank, self.x, self.y, self.z)
    }
}

impl fmt::Display for MinimumRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{} at [{}, {}]: x = {:.6}, y = {:.6}, z = {:.6}",
            self.rank, self.row, self.col, self.x, self.y, self.z
        )
    }
}
