//! Core type definitions shared across the workspace.

use serde::{Deserialize, Serialize};

/// Coordinates on a square grid, row-major: row 0 is the top edge, column 0
/// the left edge. Axes are signed so a neighbor offset can step one cell
/// past either edge before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn add(&self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Toroidal wrap for a square grid of the given dimension, one axis at
    /// a time.
    ///
    /// This is a single-step wrap: a coordinate at `dimension` or beyond
    /// snaps to 0, a negative coordinate snaps to `dimension - 1`. Neighbor
    /// offsets are always in `{-1, 0, +1}`, so one step suffices; general
    /// modulo is deliberately not used here.
    pub fn wrap(&self, dimension: i32) -> Self {
        Self {
            row: wrap_axis(self.row, dimension),
            col: wrap_axis(self.col, dimension),
        }
    }
}

fn wrap_axis(coord: i32, dimension: i32) -> i32 {
    if coord > dimension - 1 {
        0
    } else if coord < 0 {
        dimension - 1
    } else {
        coord
    }
}
