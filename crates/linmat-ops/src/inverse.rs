use linmat_grid::{Grid, GridError};

use crate::{
    determinant::check_square, error::OpsError, operations::Operations, product::identity_grid,
};

/// Invert a square grid with Gauss-Jordan elimination.
///
/// The input is copied into a working grid that is reduced to the identity
/// while the same row operations turn an identity grid into the inverse. A
/// pivot is only searched for when the diagonal entry is zero (per
/// [`Operations::is_zero`]); the first lower row with a non-zero entry in the
/// pivot column is swapped into place in both grids.
///
/// The input grid is never modified, also when the inversion fails.
///
/// # Errors
///
/// Returns [`OpsError::NotSquare`] for non-square input and
/// [`OpsError::NotInvertible`] when a column has no usable pivot.
///
/// # Example
///
/// ```
/// use linmat_grid::Grid;
/// use linmat_ops::{inverse::inverse, NumberOps};
///
/// let m = Grid::from_shape_vec([2, 2], vec![0.0, 1.0, 1.0, 0.0]).unwrap();
/// let inv = inverse(&m, &NumberOps::default()).unwrap();
/// assert_eq!(inv, m);
/// ```
pub fn inverse<O: Operations>(grid: &Grid<O::Scalar>, ops: &O) -> Result<Grid<O::Scalar>, OpsError> {
    check_square(grid)?;

    let n = grid.rows();
    let mut work = grid.clone();
    let mut result = identity_grid(n, ops)?;

    for i in 0..n {
        if ops.is_zero(&work[[i, i]]) {
            let Some(swap) = (i + 1..n).find(|&ii| !ops.is_zero(&work[[ii, i]])) else {
                log::debug!("gauss-jordan: no pivot for column {i} of {n}x{n} matrix");
                return Err(OpsError::NotInvertible { pivot: i });
            };
            log::trace!("gauss-jordan: swapping rows {i} and {swap}");
            work.swap_rows(i, swap)?;
            result.swap_rows(i, swap)?;
        }

        // scale the pivot row so the diagonal becomes 1
        let pivot = work[[i, i]].clone();
        for j in 0..n {
            work[[i, j]] = ops.divide(&work[[i, j]], &pivot);
            result[[i, j]] = ops.divide(&result[[i, j]], &pivot);
        }

        // clear column i in every other row
        for ii in (0..n).filter(|&ii| ii != i) {
            let factor = work[[ii, i]].clone();
            for j in 0..n {
                let w = ops.multiply(&factor, &work[[i, j]]);
                work[[ii, j]] = ops.subtract(&work[[ii, j]], &w);
                let r = ops.multiply(&factor, &result[[i, j]]);
                result[[ii, j]] = ops.subtract(&result[[ii, j]], &r);
            }
        }
    }

    Ok(result)
}

/// Invert `grid` and write the result into `target`.
///
/// `target` is only written once the inversion succeeded.
///
/// # Errors
///
/// Same as [`inverse`], plus a grid dimension mismatch when `target` does not
/// have the shape of `grid`.
pub fn inverse_into<O: Operations>(
    grid: &Grid<O::Scalar>,
    ops: &O,
    target: &mut Grid<O::Scalar>,
) -> Result<(), OpsError> {
    if target.shape() != grid.shape() {
        return Err(GridError::DimensionMismatch {
            expected: grid.shape(),
            actual: target.shape(),
        }
        .into());
    }
    let inv = inverse(grid, ops)?;
    target.copy_from(inv.as_slice())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{operations::NumberOps, product::matmul};
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_grid_eq(a: &Grid<f64>, b: &[f64], epsilon: f64) {
        assert_eq!(a.numel(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_inverse_2x2() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([2, 2], vec![4.0, 7.0, 2.0, 6.0])?;
        let inv = inverse(&m, &NumberOps::default())?;
        assert_grid_eq(&inv, &[0.6, -0.7, -0.2, 0.4], 1e-12);

        let m = Grid::from_shape_vec([2, 2], vec![3.0, 3.5, 3.2, 3.6])?;
        let inv = inverse(&m, &NumberOps::default())?;
        assert_grid_eq(&inv, &[-9.0, 8.75, 8.0, -7.5], 1e-9);
        Ok(())
    }

    #[test]
    fn test_inverse_requires_row_swap() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([2, 2], vec![0.0, 1.0, 1.0, 0.0])?;
        let inv = inverse(&m, &NumberOps::default())?;
        assert_grid_eq(&inv, &[0.0, 1.0, 1.0, 0.0], 0.0);

        let m = Grid::from_shape_vec([3, 3], vec![0.0, 2.0, 1.0, 0.0, 0.0, 3.0, 4.0, 1.0, 0.0])?;
        let inv = inverse(&m, &NumberOps::default())?;
        let prod = matmul(&inv, &m, &NumberOps::default())?;
        assert_grid_eq(&prod, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0], 1e-12);
        Ok(())
    }

    #[test]
    fn test_inverse_small_pivot_with_tiny_entry() -> Result<(), OpsError> {
        // the off-diagonal entry is below the tolerance but still scales a 1e6 row
        let op = NumberOps::default();
        let m = Grid::from_shape_vec([2, 2], vec![1e-6, 0.0, 5e-8, 1.0])?;
        let inv = inverse(&m, &op)?;
        assert_grid_eq(&inv, &[1e6, 0.0, -0.05, 1.0], 1e-6);

        let prod = matmul(&m, &inv, &op)?;
        assert_grid_eq(&prod, &[1.0, 0.0, 0.0, 1.0], 1e-9);
        Ok(())
    }

    #[test]
    fn test_inverse_diagonal() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec(
            [4, 4],
            vec![
                2.0, 0.0, 0.0, 0.0, 0.0, 1.5, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 1.0,
            ],
        )?;
        let original = m.clone();
        let inv = inverse(&m, &NumberOps::default())?;
        assert_eq!(m, original);
        assert_grid_eq(
            &inv,
            &[
                0.5,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / 1.5,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0 / 3.0,
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
            1e-12,
        );
        Ok(())
    }

    #[test]
    fn test_inverse_singular() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([3, 3], vec![1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 3.0, 6.0, 10.0])?;
        assert_eq!(
            inverse(&m, &NumberOps::default()),
            Err(OpsError::NotInvertible { pivot: 1 })
        );

        let z = Grid::from_shape_val([2, 2], 0.0)?;
        assert_eq!(
            inverse(&z, &NumberOps::default()),
            Err(OpsError::NotInvertible { pivot: 0 })
        );
        Ok(())
    }

    #[test]
    fn test_inverse_not_square() -> Result<(), OpsError> {
        let m = Grid::from_shape_val([3, 2], 1.0)?;
        assert_eq!(
            inverse(&m, &NumberOps::default()),
            Err(OpsError::NotSquare { rows: 3, cols: 2 })
        );
        Ok(())
    }

    #[test]
    fn test_inverse_into() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([2, 2], vec![4.0, 7.0, 2.0, 6.0])?;
        let mut target = Grid::from_shape_val([2, 2], 0.0)?;
        inverse_into(&m, &NumberOps::default(), &mut target)?;
        assert_grid_eq(&target, &[0.6, -0.7, -0.2, 0.4], 1e-12);

        let singular = Grid::from_shape_val([2, 2], 1.0)?;
        let before = target.clone();
        assert!(inverse_into(&singular, &NumberOps::default(), &mut target).is_err());
        assert_eq!(target, before);

        let mut wrong = Grid::from_shape_val([3, 3], 0.0)?;
        assert!(inverse_into(&m, &NumberOps::default(), &mut wrong).is_err());
        Ok(())
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() -> Result<(), OpsError> {
        let mut rng = StdRng::seed_from_u64(42);
        let op = NumberOps::default();
        for n in 1..=6 {
            for _ in 0..20 {
                // diagonally dominant, hence non-singular
                let m = Grid::from_shape_fn([n, n], |[r, c]| {
                    let v: f64 = rng.random_range(-1.0..1.0);
                    if r == c {
                        v + 2.0 * n as f64
                    } else {
                        v
                    }
                })?;
                let inv = inverse(&m, &op)?;
                let prod = matmul(&inv, &m, &op)?;
                let id = identity_grid(n, &op)?;
                assert_grid_eq(&prod, id.as_slice(), 1e-9);
            }
        }
        Ok(())
    }
}
