//! Grid shape definitions.
//!
//! A `Shape` describes which `(row, column)` coordinates a dense grid can address.

/// The layout family of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Every `(row, column)` with `row < rows` and `column < columns`.
    Rectangular,
    /// Lower triangle including the diagonal: `column <= row < rows`.
    Triangular,
}

/// The addressable extent of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    columns: usize,
    kind: ShapeKind,
}

impl Shape {
    /// Creates a rectangular shape.
    pub const fn rectangular(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            kind: ShapeKind::Rectangular,
        }
    }

    /// Creates a lower-triangular shape with `n` rows (and `n` columns on the last row).
    pub const fn triangular(n: usize) -> Self {
        Self {
            rows: n,
            columns: n,
            kind: ShapeKind::Triangular,
        }
    }

    /// Returns the number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns of the widest row.
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the layout family.
    pub const fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns true if this is a triangular shape.
    pub const fn is_triangular(&self) -> bool {
        matches!(self.kind, ShapeKind::Triangular)
    }

    /// Returns whether the coordinate is addressable.
    pub const fn contains(&self, row: usize, column: usize) -> bool {
        match self.kind {
            ShapeKind::Rectangular => row < self.rows && column < self.columns,
            ShapeKind::Triangular => row < self.rows && column <= row,
        }
    }

    /// Returns the number of addressable cells.
    pub const fn cell_count(&self) -> usize {
        match self.kind {
            ShapeKind::Rectangular => self.rows * self.columns,
            ShapeKind::Triangular => triangle_len(self.rows),
        }
    }

    /// Returns the last addressable coordinate, or None for an empty shape.
    pub const fn last(&self) -> Option<(usize, usize)> {
        if self.rows == 0 || self.columns == 0 {
            return None;
        }
        match self.kind {
            ShapeKind::Rectangular => Some((self.rows - 1, self.columns - 1)),
            ShapeKind::Triangular => Some((self.rows - 1, self.rows - 1)),
        }
    }
}

/// Number of cells in a lower triangle of `n` rows.
pub(crate) const fn triangle_len(n: usize) -> usize {
    (n * n + n) / 2
}
