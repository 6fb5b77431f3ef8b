use linmat_grid::GridError;
use thiserror::Error;

/// An error type for the numeric algorithms.
#[derive(Error, Debug, PartialEq)]
pub enum OpsError {
    /// The algorithm requires a square matrix.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the input
        rows: usize,
        /// Number of columns of the input
        cols: usize,
    },

    /// The operand shapes cannot be combined, e.g. left columns != right rows.
    #[error("Dimension mismatch: cannot combine {left:?} with {right:?}")]
    DimensionMismatch {
        /// Shape of the left operand
        left: [usize; 2],
        /// Shape of the right operand
        right: [usize; 2],
    },

    /// Element-wise sequences (or per-component weights) differ in length.
    #[error("Length mismatch: expected {expected} components, got {actual}")]
    LengthMismatch {
        /// Expected number of components
        expected: usize,
        /// Actual number of components
        actual: usize,
    },

    /// Gauss-Jordan elimination found no usable pivot.
    #[error("Matrix is not invertible: no non-zero pivot found for column {pivot}")]
    NotInvertible {
        /// The column for which no pivot exists
        pivot: usize,
    },

    /// Grid error
    #[error(transparent)]
    Grid(#[from] GridError),
}
