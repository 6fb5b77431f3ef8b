use linmat_grid::Grid;

use crate::{error::OpsError, operations::Operations};

/// Create an `n x n` identity grid over the given operation set.
///
/// # Errors
///
/// Returns a grid error if `n` is zero.
pub fn identity_grid<O: Operations>(n: usize, ops: &O) -> Result<Grid<O::Scalar>, OpsError> {
    Ok(Grid::from_shape_fn([n, n], |[r, c]| {
        if r == c {
            ops.one()
        } else {
            ops.zero()
        }
    })?)
}

/// Multiply two grids as matrices: `a (r x k) * b (k x c) -> (r x c)`.
///
/// # Errors
///
/// Returns [`OpsError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// # Example
///
/// ```
/// use linmat_grid::Grid;
/// use linmat_ops::{product::matmul, NumberOps};
///
/// let a = Grid::from_shape_vec([1, 3], vec![1.0, 2.0, 3.0]).unwrap();
/// let b = Grid::from_shape_vec([3, 1], vec![4.0, 5.0, 6.0]).unwrap();
/// let c = matmul(&a, &b, &NumberOps::default()).unwrap();
/// assert_eq!(c.as_slice(), &[32.0]);
/// ```
pub fn matmul<O: Operations>(
    a: &Grid<O::Scalar>,
    b: &Grid<O::Scalar>,
    ops: &O,
) -> Result<Grid<O::Scalar>, OpsError> {
    if a.cols() != b.rows() {
        return Err(OpsError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let inner = a.cols();
    Ok(Grid::from_shape_fn([a.rows(), b.cols()], |[r, c]| {
        (0..inner).fold(ops.zero(), |sum, n| {
            ops.add(&sum, &ops.multiply(&a[[r, n]], &b[[n, c]]))
        })
    })?)
}
