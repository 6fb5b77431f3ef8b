#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `linmat-grid` provides [`Grid`], the flat rectangular buffer every vector and
//! matrix in linmat is built on. A grid stores `rows * cols` values in row-major
//! order and never holds zero cells.
//!
//! Column-major data is accepted and produced only at the boundary, through
//! [`Order`], so callers exchanging buffers with graphics pipelines can pick
//! whichever layout they need without the storage order leaking out.
//!
//! # Quick Start
//!
//! ```rust
//! use linmat_grid::{Grid, Order};
//!
//! let mut g = Grid::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(g.row(1).unwrap(), vec![4, 5, 6]);
//!
//! g.transpose();
//! assert_eq!(g.shape(), [3, 2]);
//!
//! let minor = g.remove_row_col(Some(0), Some(0)).unwrap();
//! assert_eq!(minor.to_vec(Order::RowMajor), vec![5, 6]);
//! ```

/// Error types for grid operations.
pub mod error;

/// The dense grid storage and its addressing, reshaping and export operations.
pub mod grid;

/// Serde support for grids, enabled with the `serde` feature.
#[cfg(feature = "serde")]
pub mod serde;

/// Boundary ordering and the `(value, row, col)` traversal iterator.
pub mod traverse;

pub use crate::error::GridError;
pub use crate::grid::Grid;
pub use crate::traverse::{Order, Traverse};
