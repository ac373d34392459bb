use std::error::Error;
use std::fmt;

/// Errors returned by the checked matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Access on a placeholder that was never given dimensions.
    Unshaped,
    /// A `(row, col)` position outside the matrix dimensions.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },
    /// Snapshot weight count does not match the recorded dimensions.
    WeightsLength {
        rows: usize,
        columns: usize,
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Unshaped => write!(f, "matrix is unshaped (no dimensions allocated)"),
            MatrixError::OutOfBounds {
                row,
                col,
                rows,
                columns,
            } => write!(
                f,
                "position ({}, {}) is out of bounds for a {}x{} matrix",
                row, col, rows, columns
            ),
            MatrixError::WeightsLength { rows, columns, len } => write!(
                f,
                "snapshot carries {} weights but a {}x{} matrix holds {}",
                len,
                rows,
                columns,
                rows * columns
            ),
        }
    }
}

impl Error for MatrixError {}
