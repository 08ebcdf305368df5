//! Gridbench Dense - directly indexed grid representations.
//!
//! This crate provides the dense baselines the sparse matrix is measured against:
//!
//! - `StaticGrid`: fixed-size rectangular grid, `[[T; C]; R]`
//! - `DynamicGrid`: heap-allocated rectangular grid, one boxed slice per row
//! - `StaticTriangle`: fixed-size lower triangle packed into `[T; LEN]`
//! - `DynamicTriangle`: heap-allocated lower triangle, row `i` holds `i + 1` cells
//!
//! # Example
//!
//! ```rust
//! use gridbench_core::Grid;
//! use gridbench_dense::{DynamicTriangle, StaticGrid};
//!
//! let mut rect: StaticGrid<i32, 2, 3> = StaticGrid::new();
//! rect.set(1, 2, 7).unwrap();
//! assert_eq!(rect.get(1, 2), Some(&7));
//! assert!(rect.set(2, 0, 1).is_err());
//!
//! let mut tri: DynamicTriangle<i32> = DynamicTriangle::new(3);
//! tri.write(2, 1, 4).unwrap();
//! assert_eq!(tri.read(2, 1), Some(4));
//! assert_eq!(tri.read(1, 2), None);
//! ```

#![no_std]

extern crate alloc;

mod rect;
mod triangle;

pub use rect::{DynamicGrid, StaticGrid};
pub use triangle::{triangle_offset, DynamicTriangle, StaticTriangle};
