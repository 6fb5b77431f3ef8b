//! Homogeneous padding for products between matrices and shorter vectors.
//!
//! A vector with fewer components than the matrix side it is multiplied with is
//! extended with zeros, and its last missing component is set to one. The
//! product is then fitted back to the length of the original vector by
//! truncating or zero-extending it.

use linmat_grid::Grid;
use linmat_ops::{product::matmul, Operations};

use crate::error::AlgebraError;

/// Extend `values` to `len` components: zeros followed by a trailing one.
pub(crate) fn pad<O: Operations>(
    values: &[O::Scalar],
    len: usize,
    ops: &O,
) -> Result<Vec<O::Scalar>, AlgebraError> {
    if values.len() > len {
        return Err(AlgebraError::DimensionMismatch {
            expected: len,
            actual: values.len(),
        });
    }

    let mut padded = values.to_vec();
    if padded.len() < len {
        padded.resize(len - 1, ops.zero());
        padded.push(ops.one());
    }
    Ok(padded)
}

/// Truncate or zero-extend `values` to `len` components.
pub(crate) fn fit<O: Operations>(
    mut values: Vec<O::Scalar>,
    len: usize,
    ops: &O,
) -> Vec<O::Scalar> {
    values.resize(len, ops.zero());
    values
}

/// `m · v` with `v` padded to `m.cols()`, fitted back to `v.len()`.
pub(crate) fn matrix_times<O: Operations>(
    m: &Grid<O::Scalar>,
    v: &[O::Scalar],
    ops: &O,
) -> Result<Vec<O::Scalar>, AlgebraError> {
    let padded = pad(v, m.cols(), ops)?;
    if padded.len() != v.len() {
        log::trace!("padding {} components to {} for a {:?} matrix", v.len(), padded.len(), m.shape());
    }
    let column = Grid::from_shape_vec([padded.len(), 1], padded)?;
    let product = matmul(m, &column, ops)?;
    Ok(fit(product.into_vec(), v.len(), ops))
}

/// `v · m` with `v` padded to `m.rows()`, fitted back to `v.len()`.
pub(crate) fn times_matrix<O: Operations>(
    v: &[O::Scalar],
    m: &Grid<O::Scalar>,
    ops: &O,
) -> Result<Vec<O::Scalar>, AlgebraError> {
    let padded = pad(v, m.rows(), ops)?;
    let row = Grid::from_shape_vec([1, padded.len()], padded)?;
    let product = matmul(&row, m, ops)?;
    Ok(fit(product.into_vec(), v.len(), ops))
}
