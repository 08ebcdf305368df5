//! Gridbench Sparse - a sparse matrix made of linked rows and linked entries.
//!
//! Only non-zero cells are stored. Rows form an ordered singly-linked list
//! (the row index); each row owns an ordered singly-linked list of
//! `(column, value)` entries. Both lists start with a sentinel node, and every
//! node lives in an index-based arena.
//!
//! # Example
//!
//! ```rust
//! use gridbench_sparse::SparseMatrix;
//!
//! let mut matrix: SparseMatrix<i32> = SparseMatrix::new();
//! matrix.set(2, 3, 5);
//! matrix.set(0, 0, 1);
//! assert_eq!(matrix.get(2, 3), 5);
//! assert_eq!(matrix.get(1, 1), 0);
//!
//! // Writing zero removes the cell, and the emptied row with it.
//! matrix.set(2, 3, 0);
//! assert_eq!(matrix.get(2, 3), 0);
//! assert_eq!(matrix.rows().collect::<Vec<_>>(), vec![0]);
//!
//! let cells: Vec<_> = matrix.iter().collect();
//! assert_eq!(cells, vec![(0, 0, &1)]);
//! ```

#![no_std]

extern crate alloc;

mod arena;
mod iter;
mod matrix;
mod node;
mod stats;

pub use iter::{Iter, RowEntries, Rows};
pub use matrix::SparseMatrix;
pub use node::{EntryId, RowId, SENTINEL_KEY};
pub use stats::MatrixStats;
