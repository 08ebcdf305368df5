//! Grid trait definition.
//!
//! Every array representation implements `Grid` so the measurement harness can
//! fill and read them through one code path.

use crate::error::Result;
use crate::value::Cell;

/// A 2-D grid of cells addressed by `(row, column)`.
pub trait Grid<T: Cell> {
    /// Reads the cell at the coordinate.
    ///
    /// Returns None when the grid cannot address the coordinate. Grids without
    /// a fixed extent return the zero value for unwritten cells instead.
    fn read(&self, row: usize, column: usize) -> Option<T>;

    /// Writes the cell at the coordinate.
    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()>;
}
