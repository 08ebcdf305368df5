//! Lower-triangular grids.
//!
//! Only cells with `column <= row` exist. The fixed-size variant packs the
//! triangle row by row into one array; the heap variant gives row `i` its own
//! allocation of `i + 1` cells.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use gridbench_core::{Cell, Error, Grid, Result, Shape};

/// Offset of `(row, column)` in a row-major packed lower triangle.
#[inline]
pub const fn triangle_offset(row: usize, column: usize) -> usize {
    (row * row + row) / 2 + column
}

/// Fixed-size lower triangle of `N` rows packed into `[T; LEN]`.
///
/// `LEN` must equal `N * (N + 1) / 2`; any other value fails to compile.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticTriangle<T, const N: usize, const LEN: usize> {
    cells: [T; LEN],
}

impl<T, const N: usize, const LEN: usize> StaticTriangle<T, N, LEN> {
    const PACKED_LEN: () = assert!(LEN == N * (N + 1) / 2, "LEN must equal N * (N + 1) / 2");
}

impl<T: Cell, const N: usize, const LEN: usize> StaticTriangle<T, N, LEN> {
    /// Creates a zero-filled triangle.
    pub fn new() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Cell, const N: usize, const LEN: usize> Default for StaticTriangle<T, N, LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, const LEN: usize> StaticTriangle<T, N, LEN> {
    /// Creates a triangle with every cell set to `value`.
    pub fn filled(value: T) -> Self {
        let () = Self::PACKED_LEN;
        Self {
            cells: core::array::from_fn(|_| value.clone()),
        }
    }
}

impl<T, const N: usize, const LEN: usize> StaticTriangle<T, N, LEN> {
    /// Returns the grid shape.
    pub const fn shape(&self) -> Shape {
        Shape::triangular(N)
    }

    /// Returns the number of cells.
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Returns true if the triangle has no cells.
    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }

    /// Returns the packed offset of the cell, or None outside the triangle.
    pub const fn slot(row: usize, column: usize) -> Option<usize> {
        if row < N && column <= row {
            Some(triangle_offset(row, column))
        } else {
            None
        }
    }

    /// Returns the packed cells.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Returns the cell, or None outside the triangle.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        Self::slot(row, column).map(|slot| &self.cells[slot])
    }

    /// Returns the cell mutably, or None outside the triangle.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        match Self::slot(row, column) {
            Some(slot) => Some(&mut self.cells[slot]),
            None => None,
        }
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

    /// Returns one row as a slice of `row + 1` cells.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        let start = Self::slot(row, 0)?;
        Some(&self.cells[start..start + row + 1])
    }
}

impl<T, const N: usize, const LEN: usize> Index<(usize, usize)> for StaticTriangle<T, N, LEN> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.get(row, column) {
            Some(cell) => cell,
            None => panic!("({}, {}) is outside a triangle of {} rows", row, column, N),
        }
    }
}

impl<T, const N: usize, const LEN: usize> IndexMut<(usize, usize)> for StaticTriangle<T, N, LEN> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.get_mut(row, column) {
            Some(cell) => cell,
            None => panic!("({}, {}) is outside a triangle of {} rows", row, column, N),
        }
    }
}

impl<T: Cell, const N: usize, const LEN: usize> Grid<T> for StaticTriangle<T, N, LEN> {
    fn read(&self, row: usize, column: usize) -> Option<T> {
        self.get(row, column).cloned()
    }

    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.set(row, column, value)
    }
}

/// Heap-allocated lower triangle, one allocation per row.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicTriangle<T> {
    rows: Vec<Box<[T]>>,
}

impl<T: Cell> DynamicTriangle<T> {
    /// Creates a zero-filled triangle of `n` rows.
    pub fn new(n: usize) -> Self {
        Self::filled(n, T::zero())
    }
}

impl<T: Clone> DynamicTriangle<T> {
    /// Creates a triangle of `n` rows with every cell set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            rows: (0..n)
                .map(|i| alloc::vec![value.clone(); i + 1].into_boxed_slice())
                .collect(),
        }
    }
}

impl<T> DynamicTriangle<T> {
    /// Returns the grid shape.
    pub fn shape(&self) -> Shape {
        Shape::triangular(self.rows.len())
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.shape().cell_count()
    }

    /// Returns true if the triangle has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell, or None outside the triangle.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        self.rows.get(row)?.get(column)
    }

    /// Returns the cell mutably, or None outside the triangle.
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

    /// Returns one row as a slice of `row + 1` cells.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        self.rows.get(row).map(|r| &r[..])
    }
}

impl<T> Index<(usize, usize)> for DynamicTriangle<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.rows[row][column]
    }
}

impl<T> IndexMut<(usize, usize)> for DynamicTriangle<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.rows[row][column]
    }
}

impl<T: Cell> Grid<T> for DynamicTriangle<T> {
    fn read(&self, row: usize, column: usize) -> Option<T> {
        self.get(row, column).cloned()
    }

    fn write(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        self.set(row, column, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_offset() {
        assert_eq!(triangle_offset(0, 0), 0);
        assert_eq!(triangle_offset(1, 0), 1);
        assert_eq!(triangle_offset(1, 1), 2);
        assert_eq!(triangle_offset(2, 0), 3);
        assert_eq!(triangle_offset(499, 499), (500 * 500 + 500) / 2 - 1);
    }

    #[test]
    fn test_static_triangle_set_get() {
        let mut tri: StaticTriangle<i32, 4, 10> = StaticTriangle::new();
        assert_eq!(tri.len(), 10);
        tri.set(0, 0, 1).unwrap();
        tri.set(3, 3, 2).unwrap();
        tri[(2, 1)] = 3;

        assert_eq!(tri.get(0, 0), Some(&1));
        assert_eq!(tri.read(3, 3), Some(2));
        assert_eq!(tri.as_slice()[triangle_offset(2, 1)], 3);
        assert_eq!(tri.as_slice().last(), Some(&2));
        assert_eq!(tri.row(2), Some(&[0, 3, 0][..]));
    }

    #[test]
    fn test_static_triangle_above_diagonal() {
        let mut tri: StaticTriangle<i32, 3, 6> = StaticTriangle::new();
        assert_eq!(tri.get(0, 1), None);
        assert_eq!(tri.set(1, 2, 5), Err(Error::above_diagonal(1, 2)));
        assert_eq!(
            tri.set(3, 0, 5),
            Err(Error::out_of_bounds(3, 0, Shape::triangular(3)))
        );
        assert_eq!(StaticTriangle::<i32, 3, 6>::slot(2, 2), Some(5));
        assert_eq!(StaticTriangle::<i32, 3, 6>::slot(2, 3), None);
    }

    #[test]
    #[should_panic(expected = "outside a triangle")]
    fn test_static_triangle_index_panics() {
        let tri: StaticTriangle<i32, 3, 6> = StaticTriangle::new();
        let _ = tri[(0, 1)];
    }

    #[test]
    fn test_dynamic_triangle_set_get() {
        let mut tri: DynamicTriangle<u8> = DynamicTriangle::new(5);
        assert_eq!(tri.len(), 15);
        assert_eq!(tri.row(4).map(|r| r.len()), Some(5));

        tri.write(4, 4, 1).unwrap();
        tri.write(0, 0, 1).unwrap();
        assert_eq!(tri[(4, 4)], 1);
        assert_eq!(tri.read(0, 0), Some(1));
        assert_eq!(tri.read(0, 1), None);
        assert_eq!(tri.set(2, 3, 1), Err(Error::above_diagonal(2, 3)));
    }

    #[test]
    fn test_static_and_dynamic_agree() {
        let mut packed: StaticTriangle<i32, 6, 21> = StaticTriangle::new();
        let mut rows: DynamicTriangle<i32> = DynamicTriangle::new(6);
        for i in 0..6 {
            for j in 0..=i {
                let value = (i * 10 + j) as i32;
                packed.set(i, j, value).unwrap();
                rows.set(i, j, value).unwrap();
            }
        }
        for i in 0..6 {
            assert_eq!(packed.row(i), rows.row(i));
        }
    }
}
