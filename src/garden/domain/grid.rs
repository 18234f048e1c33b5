//! Placement grid for planted trees.

use super::GardenDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based coordinates of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    row: u8,
    col: u8,
}

impl GridCell {
    /// Creates a cell at the given zero-based coordinates.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the zero-based row.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the zero-based column.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Bounds of a garden's placement grid.
///
/// Every owner currently gets the same default grid; the dimensions are a
/// value so services stay testable with smaller grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    rows: u8,
    cols: u8,
}

impl GridDimensions {
    /// Rows in the default garden grid.
    pub const DEFAULT_ROWS: u8 = 5;

    /// Columns in the default garden grid.
    pub const DEFAULT_COLS: u8 = 5;

    /// Creates grid dimensions.
    #[must_use]
    pub const fn new(rows: u8, cols: u8) -> Self {
        Self { rows, cols }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(self) -> u16 {
        u16::from(self.rows) * u16::from(self.cols)
    }

    /// Reports whether the cell lies within these bounds.
    #[must_use]
    pub const fn contains(self, cell: GridCell) -> bool {
        cell.row() < self.rows && cell.col() < self.cols
    }

    /// Finds the first unoccupied cell in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`GardenDomainError::GridFull`] when every cell is occupied.
    pub fn first_free_cell(self, occupied: &[GridCell]) -> Result<GridCell, GardenDomainError> {
        (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| GridCell::new(row, col)))
            .find(|cell| !occupied.contains(cell))
            .ok_or(GardenDomainError::GridFull {
                rows: self.rows,
                cols: self.cols,
            })
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
    }
}
