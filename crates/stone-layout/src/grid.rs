//! Row-major sweep over a padded region.

use std::iter::FusedIterator;

/// A uniform square grid clipped to a half-open window on the base plane.
///
/// Positions start at `(x_start, y_start)` and advance by `step` while
/// `x < x_end` (outer) and `y < y_end` (inner). Coordinates are produced by
/// repeated addition of `step`, not by multiplication, so a row holds exactly
/// the values a running accumulator would reach.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoneGrid {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub z: f64,
    pub step: f64,
}

impl StoneGrid {
    /// True when no position can be emitted.
    pub fn is_empty(&self) -> bool {
        !(self.x_start < self.x_end && self.y_start < self.y_end)
    }

    /// Whether adding `step` changes every coordinate the sweep can visit.
    ///
    /// Float spacing grows with magnitude, so it is enough to check the
    /// largest coordinate in the window.
    pub fn step_advances(&self) -> bool {
        if self.step.is_nan() || self.step <= 0.0 {
            return false;
        }
        let magnitude = [self.x_start, self.x_end, self.y_start, self.y_end]
            .iter()
            .fold(0.0f64, |acc, v| acc.max(v.abs()));
        magnitude + self.step != magnitude
    }

    /// Estimated number of cells, `ceil(extent / step)` per axis.
    ///
    /// Accumulated rounding can make the real sweep differ by one row or
    /// column, so this is only used as a size guard.
    pub fn estimated_len(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let cols = ((self.x_end - self.x_start) / self.step).ceil();
        let rows = ((self.y_end - self.y_start) / self.step).ceil();
        cols * rows
    }

    /// Lazily walk the grid. The iterator can be cloned to restart a sweep.
    pub fn positions(&self) -> GridPositions {
        // An empty inner range yields nothing for every column; skip the
        // outer sweep entirely instead of spinning through it.
        let x = if self.y_start < self.y_end {
            self.x_start
        } else {
            self.x_end
        };
        GridPositions {
            grid: *self,
            x,
            y: self.y_start,
        }
    }
}

/// Iterator over `[x, y, z]` grid positions in row-major order.
#[derive(Debug, Clone)]
pub struct GridPositions {
    grid: StoneGrid,
    x: f64,
    y: f64,
}

impl Iterator for GridPositions {
    type Item = [f64; 3];

    fn next(&mut self) -> Option<Self::Item> {
        while self.x < self.grid.x_end {
            if self.y < self.grid.y_end {
                let position = [self.x, self.y, self.grid.z];
                self.y += self.grid.step;
                return Some(position);
            }
            self.x += self.grid.step;
            self.y = self.grid.y_start;
        }
        None
    }
}

impl FusedIterator for GridPositions {}
