#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every algorithm in this crate is generic over an [`Operations`] value, the
//! operation set. The algorithms never touch scalar arithmetic directly, so the
//! same determinant or inverse runs on `f32`, `f64` or any user-provided
//! scalar representation.
//!
//! ```rust
//! use linmat_grid::Grid;
//! use linmat_ops::{determinant::determinant, inverse::inverse, NumberOps};
//!
//! let op = NumberOps::default();
//! let m = Grid::from_shape_vec([2, 2], vec![4.0, 7.0, 2.0, 6.0]).unwrap();
//! assert_eq!(determinant(&m, &op).unwrap(), 10.0);
//! assert!(inverse(&m, &op).is_ok());
//! ```

/// Determinants by closed form or cofactor expansion.
pub mod determinant;

/// Error types for the numeric algorithms.
pub mod error;

/// Scalar clamp, mix, step and smoothstep plus their component-wise forms.
pub mod interpolation;

/// Gauss-Jordan matrix inversion.
pub mod inverse;

/// The operation set trait and the default floating point implementation.
///
/// Defines [`Operations`], [`NumberOps`] and the [`Scalar`] binding used by the
/// higher level types to pick a default operation set.
pub mod operations;

/// Matrix products and identity construction.
pub mod product;

pub use crate::determinant::DeterminantStrategy;
pub use crate::error::OpsError;
pub use crate::interpolation::Weight;
pub use crate::operations::{NumberOps, Operations, Scalar, DEFAULT_EPSILON};
