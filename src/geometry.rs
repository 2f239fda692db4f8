use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// A cell position within a stimulus grid.
///
/// Ordering is row-major, so ordered sets of coordinates iterate in the same
/// order the grid is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u32,
    pub column: u32,
}

impl Coordinate {
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}

/// Number of rows and columns bounding the coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: u32,
    pub columns: u32,
}

impl GridSize {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    pub const fn square(dimension: u32) -> Self {
        Self::new(dimension, dimension)
    }

    /// Reject grids with no rows or no columns.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GenerationError::ConstraintViolation(format!(
                "grid must have at least one row and one column, got {}x{}",
                self.rows, self.columns
            )));
        }
        Ok(())
    }

    /// Total number of cells.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.column < self.columns
    }

    /// Every coordinate of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |column| Coordinate::new(row, column)))
    }
}
