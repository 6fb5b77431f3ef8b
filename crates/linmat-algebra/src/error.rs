use linmat_grid::GridError;
use linmat_ops::OpsError;
use thiserror::Error;

/// An error type for vector and matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum AlgebraError {
    /// Vectors have two, three or four components.
    #[error("Invalid vector dimension {dim}, expected 2, 3 or 4")]
    InvalidDimensions {
        /// The requested dimension
        dim: usize,
    },

    /// A swizzle pattern names an unknown component or one the vector does not have.
    #[error("Invalid swizzle pattern {pattern:?}: component {letter:?} is not available")]
    InvalidSwizzlePattern {
        /// The full pattern
        pattern: String,
        /// The first offending letter
        letter: char,
    },

    /// The operands do not have compatible component counts.
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Number of components required by the operation
        expected: usize,
        /// Number of components provided
        actual: usize,
    },

    /// Grid error
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Numeric algorithm error
    #[error(transparent)]
    Ops(#[from] OpsError),
}
