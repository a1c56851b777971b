//! Relative-offset API for element update functions.

use std::fmt;

use crate::cell::Cell;
use crate::rng::CellRng;
use crate::Grid;

/// View of the grid centred on the cell being updated.
///
/// Off-grid neighbours read as `None`, so rules bounds-check by matching
/// instead of touching the Grid Store out of range.
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
    rng: &'a mut dyn CellRng,
}

impl fmt::Debug for SandApi<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SandApi")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish_non_exhaustive()
    }
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32, rng: &'a mut dyn CellRng) -> Self {
        Self { grid, x, y, rng }
    }

    #[must_use]
    pub fn get(&self, dx: i32, dy: i32) -> Option<Cell> {
        let (x, y) = (self.x + dx, self.y + dy);
        self.grid.in_bounds(x, y).then(|| self.grid.get(x, y))
    }

    /// True when the neighbour exists and holds `Empty`.
    #[must_use]
    pub fn is_empty(&self, dx: i32, dy: i32) -> bool {
        self.get(dx, dy).is_some_and(Cell::is_empty)
    }

    /// Move the current cell to the neighbour at `(dx, dy)`, leaving `Empty` behind.
    ///
    /// The destination must be on the grid.
    pub fn move_to(&mut self, dx: i32, dy: i32) {
        let me = self.grid.get(self.x, self.y);
        self.grid.set(self.x + dx, self.y + dy, me);
        self.grid.set(self.x, self.y, Cell::empty());
    }

    pub fn coin_flip(&mut self) -> bool {
        self.rng.coin_flip()
    }
}
