#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! [`Vector`] holds two to four components that can be read by index or by
//! GLSL-style names (`xyzw`, `rgba`, `stuv`, `ijkl`). [`Matrix`] wraps a dense
//! row-major grid of any size and delegates determinants, inverses and products
//! to `linmat-ops`.
//!
//! Products take an [`Operand`], so a matrix can be multiplied with another
//! matrix, a vector or a plain slice through the same [`Matrix::dot`] call.
//! Vectors shorter than the matrix are padded homogeneously: missing
//! components are zero except the last, which is one.
//!
//! # Quick Start
//!
//! ```rust
//! use linmat_algebra::{Matrix, Vector};
//!
//! // translate by (2, -3)
//! let t = Matrix::from_rows(3, &[1.0, 0.0, 2.0, 0.0, 1.0, -3.0, 0.0, 0.0, 1.0]).unwrap();
//! let p = t.mul_vector(&Vector::vec2(1.0, 1.0)).unwrap();
//! assert_eq!(p.swizzle("yx").unwrap(), vec![-2.0, 3.0]);
//!
//! let inv = t.inverse().unwrap();
//! assert_eq!(inv.mul_vector(&p).unwrap(), Vector::vec2(1.0, 1.0));
//! ```

/// Error types for vector and matrix operations.
pub mod error;

mod homogeneous;

/// The arbitrary-size matrix type.
pub mod matrix;

/// Closed operand and product variants used by the `dot` methods.
pub mod operand;

/// The 2 to 4 component vector type and its component aliases.
pub mod vector;

pub use crate::error::AlgebraError;
pub use crate::matrix::Matrix;
pub use crate::operand::{Operand, Product};
pub use crate::vector::Vector;
