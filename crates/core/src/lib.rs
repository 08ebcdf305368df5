//! Gridbench Core - shared types for the gridbench array representations.
//!
//! This crate provides the vocabulary every grid crate builds on:
//!
//! - `Cell`: the value contract of a grid cell (an explicit zero and a zero test)
//! - `Shape`: the addressable extent of a grid (rectangular or lower-triangular)
//! - `Grid`: the get/set surface the measurement harness drives
//! - `Error`: error types for grid operations
//!
//! # Example
//!
//! ```rust
//! use gridbench_core::{Cell, Shape};
//!
//! let shape = Shape::triangular(4);
//! assert!(shape.contains(3, 2));
//! assert!(!shape.contains(2, 3));
//! assert_eq!(shape.cell_count(), 10);
//!
//! assert!(0i32.is_zero());
//! assert_eq!(<f64 as Cell>::zero(), 0.0);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod grid;
mod types;
mod value;

pub use error::{Error, Result};
pub use grid::Grid;
pub use types::{Shape, ShapeKind};
pub use value::Cell;
