//! Error types for gridbench.

use crate::types::Shape;
use alloc::string::String;
use core::fmt;

/// Result type alias for grid operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for grid operations.
///
/// Reading an absent sparse cell is never an error; these variants only cover
/// writes a dense grid cannot address and structural checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside a grid's shape.
    OutOfBounds {
        row: usize,
        column: usize,
        shape: Shape,
    },
    /// Triangular grid write with `column > row`.
    AboveDiagonal {
        row: usize,
        column: usize,
    },
    /// A linked-list invariant does not hold.
    InvariantViolation {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds { row, column, shape } => {
                write!(
                    f,
                    "Coordinate ({}, {}) out of bounds for {}x{} grid",
                    row,
                    column,
                    shape.rows(),
                    shape.columns()
                )
            }
            Error::AboveDiagonal { row, column } => {
                write!(
                    f,
                    "Coordinate ({}, {}) lies above the diagonal of a triangular grid",
                    row, column
                )
            }
            Error::InvariantViolation { message } => {
                write!(f, "Invariant violation: {}", message)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an out of bounds error.
    pub fn out_of_bounds(row: usize, column: usize, shape: Shape) -> Self {
        Error::OutOfBounds { row, column, shape }
    }

    /// Creates an above diagonal error.
    pub fn above_diagonal(row: usize, column: usize) -> Self {
        Error::AboveDiagonal { row, column }
    }

    /// Creates an invariant violation error.
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Error::InvariantViolation {
            message: message.into(),
        }
    }

    /// Classifies a write outside `shape`.
    pub fn outside(row: usize, column: usize, shape: Shape) -> Self {
        if shape.is_triangular() && row < shape.rows() && column > row {
            Error::above_diagonal(row, column)
        } else {
            Error::out_of_bounds(row, column, shape)
        }
    }
}
