//! Rectangular grids.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use gridbench_core::{Cell, Error, Grid, Result, Shape};

/// Fixed-size rectangular grid stored inline.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticGrid<T, const R: usize, const C: usize> {
    cells: [[T; C]; R],
}

impl<T: Cell, const R: usize, const C: usize> StaticGrid<T, R, C> {
    /// Creates a zero-filled grid.
    pub fn new() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Cell, const R: usize, const C: usize> Default for StaticGrid<T, R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const R: usize, const C: usize> StaticGrid<T, R, C> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            cells: core::array::from_fn(|_| core::array::from_fn(|_| value.clone())),
        }
    }
}

impl<T, const R: usize, const C: usize> StaticGrid<T, R, C> {
    /// Returns the grid shape.
    pub const fn shape(&self) -> Shape {
        Shape::rectangular(R, C)
    }

    /// Returns the number of cells.
    pub const fn len(&self) -> usize {
        R * C
    }

    /// Returns true if the grid has no cells.
    pub const fn is_empty(&self) -> bool {
        R == 0 || C == 0
    }

    /// Returns the cell, or None outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.cells.get(row)?.get(column)
    }

    /// Returns the cell mutably, or None outside the grid.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(column)
    }

    /// Stores a value.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let shape = self.shape();
        let cell = self
            .get_mut(row, column)
            .ok_or_else(|| Error::outside(row, column, shape))?;
        *cell = value;
        Ok(())
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.cells.get(row).map(|r| r.as_slice())
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for StaticGrid<T, R, C> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[row][column]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for StaticGrid<T, R, C> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.cells[row][column]
    }
}

impl<T: Cell, const R: usize, const C: usize> Grid<T> for StaticGrid<T, R, C> {
    fn read(&self, row: usize, column: usize) -> Option<T> {
        self.get(row, column).cloned()
    }

    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.set(row, column, value)
    }
}

/// Heap-allocated rectangular grid, one allocation per row.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicGrid<T> {
    rows: Vec<Box<[T]>>,
    columns: usize,
}

impl<T: Cell> DynamicGrid<T> {
    /// Creates a zero-filled grid.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, T::zero())
    }
}

impl<T: Clone> DynamicGrid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, columns: usize, value: T) -> Self {
        Self {
            rows: (0..rows)
                .map(|_| alloc::vec![value.clone(); columns].into_boxed_slice())
                .collect(),
            columns,
        }
    }
}

impl<T> DynamicGrid<T> {
    /// Returns the grid shape.
    pub fn shape(&self) -> Shape {
        Shape::rectangular(self.rows.len(), self.columns)
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.rows.len() * self.columns
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cell, or None outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row)?.get(column)
    }

    /// Returns the cell mutably, or None outside the grid.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Stores a value.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        let shape = self.shape();
        let cell = self
            .get_mut(row, column)
            .ok_or_else(|| Error::outside(row, column, shape))?;
        *cell = value;
        Ok(())
    }

    /// Returns one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(|r| &r[..])
    }
}

impl<T> Index<(usize, usize)> for DynamicGrid<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.rows[row][column]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicGrid<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.rows[row][column]
    }
}

impl<T: Cell> Grid<T> for DynamicGrid<T> {
    fn read(&self, row: usize, column: usize) -> Option<T> {
        self.get(row, column).cloned()
    }

    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.set(row, column, value)
    }
}
