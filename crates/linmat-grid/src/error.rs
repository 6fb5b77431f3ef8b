use thiserror::Error;

/// An error type for grid construction, addressing and reshaping.
#[derive(Error, Debug, PartialEq)]
pub enum GridError {
    /// The requested shape has no rows or no columns, or a region does not fit the grid.
    ///
    /// Grids always hold at least one element, so every constructor and every
    /// reshaping operation that would produce an empty grid reports this error.
    #[error("Invalid dimensions: a grid of {rows}x{cols} cannot be created")]
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// The data length does not match the requested shape.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },

    /// A row or column index exceeds the grid bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    OutOfRange {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// Two grids that must share a shape do not.
    #[error("Dimension mismatch: expected shape {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Expected `[rows, cols]`
        expected: [usize; 2],
        /// Actual `[rows, cols]`
        actual: [usize; 2],
    },
}

impl GridError {
    /// Creates an OutOfRange error with clear context.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }

    /// Creates an InvalidDimensions error for the given shape.
    pub fn invalid_dimensions(rows: usize, cols: usize) -> Self {
        Self::InvalidDimensions { rows, cols }
    }
}
