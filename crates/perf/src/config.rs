//! Command-line configuration

use crate::utils::{DEFAULT_COLS, DEFAULT_ROWS};
use clap::{Parser, ValueEnum};

/// Fill and access timings for dense, triangular and sparse grids.
#[derive(Parser, Debug, Clone)]
#[command(name = "perf", version)]
pub struct Config {
    /// Rows of the dynamic and sparse grids (triangles use this as their size)
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Columns of the dynamic and sparse grids
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Seed for the 0/1 cell generator
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Measured iterations per case
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub iterations: u64,

    /// Representations to run (all when omitted)
    #[arg(value_enum)]
    pub categories: Vec<Category>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Rectangular arrays, fixed-size and heap-allocated
    Rect,
    /// Triangular arrays, fixed-size and heap-allocated
    Tri,
    /// Linked sparse matrix
    Sparse,
}

impl Config {
    pub fn wants(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }

    pub fn iterations(&self) -> usize {
        self.iterations as usize
    }
}
