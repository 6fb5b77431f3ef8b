use linmat_grid::Grid;

use crate::{error::OpsError, operations::Operations};

/// How [`determinant_with_strategy`] computes a determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminantStrategy {
    /// Use the closed-form formulas for 2x2, 3x3 and 4x4 matrices and cofactor
    /// expansion for every other size.
    #[default]
    ClosedForm,
    /// Always use recursive cofactor expansion.
    Cofactor,
}

pub(crate) fn check_square<T>(grid: &Grid<T>) -> Result<(), OpsError> {
    if !grid.is_square() {
        return Err(OpsError::NotSquare {
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    Ok(())
}

/// Compute the determinant of a square grid using the default strategy.
///
/// # Errors
///
/// Returns [`OpsError::NotSquare`] if the grid is not square.
///
/// # Example
///
/// ```
/// use linmat_grid::Grid;
/// use linmat_ops::{determinant::determinant, NumberOps};
///
/// let m = Grid::from_shape_vec([3, 3], vec![-2.0, 2.0, 3.0, -1.0, 1.0, 3.0, 2.0, 0.0, -1.0]).unwrap();
/// assert_eq!(determinant(&m, &NumberOps::default()).unwrap(), 6.0);
/// ```
pub fn determinant<O: Operations>(
    grid: &Grid<O::Scalar>,
    ops: &O,
) -> Result<O::Scalar, OpsError> {
    determinant_with_strategy(grid, ops, DeterminantStrategy::default())
}

/// Compute the determinant of a square grid with an explicit strategy.
pub fn determinant_with_strategy<O: Operations>(
    grid: &Grid<O::Scalar>,
    ops: &O,
    strategy: DeterminantStrategy,
) -> Result<O::Scalar, OpsError> {
    check_square(grid)?;

    let n = grid.rows();
    log::trace!("determinant of {n}x{n} with {strategy:?}");

    match (strategy, n) {
        (_, 1) => Ok(grid[[0, 0]].clone()),
        (DeterminantStrategy::ClosedForm, 2) => Ok(determinant2(grid, ops)),
        (DeterminantStrategy::ClosedForm, 3) => Ok(determinant3(grid, ops)),
        (DeterminantStrategy::ClosedForm, 4) => Ok(determinant4(grid, ops)),
        _ => cofactor_determinant(grid, ops),
    }
}

/// Compute the determinant by recursive cofactor expansion along row 0.
///
/// Terms whose row-0 entry is zero (per [`Operations::is_zero`]) are skipped,
/// so sparse rows avoid the recursive work entirely.
pub fn cofactor_determinant<O: Operations>(
    grid: &Grid<O::Scalar>,
    ops: &O,
) -> Result<O::Scalar, OpsError> {
    check_square(grid)?;

    if grid.rows() == 1 {
        return Ok(grid[[0, 0]].clone());
    }

    let mut d = ops.zero();
    for c in 0..grid.cols() {
        let v = &grid[[0, c]];
        if ops.is_zero(v) {
            continue;
        }
        let minor = grid.remove_row_col(Some(0), Some(c))?;
        let mut cofactor = cofactor_determinant(&minor, ops)?;
        if c % 2 == 1 {
            cofactor = ops.negate(&cofactor);
        }
        d = ops.add(&d, &ops.multiply(v, &cofactor));
    }
    Ok(d)
}

// a * b - c * d
fn diff_of_products<O: Operations>(
    ops: &O,
    a: &O::Scalar,
    b: &O::Scalar,
    c: &O::Scalar,
    d: &O::Scalar,
) -> O::Scalar {
    ops.subtract(&ops.multiply(a, b), &ops.multiply(c, d))
}

fn determinant2<O: Operations>(m: &Grid<O::Scalar>, ops: &O) -> O::Scalar {
    diff_of_products(ops, &m[[0, 0]], &m[[1, 1]], &m[[0, 1]], &m[[1, 0]])
}

fn determinant3<O: Operations>(m: &Grid<O::Scalar>, ops: &O) -> O::Scalar {
    let term = |a: [usize; 2], b: [usize; 2], c: [usize; 2]| {
        ops.multiply(&ops.multiply(&m[a], &m[b]), &m[c])
    };

    let positive = [
        term([0, 0], [1, 1], [2, 2]),
        term([0, 1], [1, 2], [2, 0]),
        term([0, 2], [1, 0], [2, 1]),
    ];
    let negative = [
        term([0, 0], [1, 2], [2, 1]),
        term([0, 1], [1, 0], [2, 2]),
        term([0, 2], [1, 1], [2, 0]),
    ];

    let d = positive.iter().fold(ops.zero(), |acc, t| ops.add(&acc, t));
    negative.iter().fold(d, |acc, t| ops.subtract(&acc, t))
}

// Laplace expansion over the 2x2 minors of the top two rows and their
// complementary minors in the bottom two rows.
fn determinant4<O: Operations>(m: &Grid<O::Scalar>, ops: &O) -> O::Scalar {
    let minor = |r: usize, c0: usize, c1: usize| {
        diff_of_products(ops, &m[[r, c0]], &m[[r + 1, c1]], &m[[r, c1]], &m[[r + 1, c0]])
    };

    let s0 = minor(0, 0, 1);
    let s1 = minor(0, 0, 2);
    let s2 = minor(0, 0, 3);
    let s3 = minor(0, 1, 2);
    let s4 = minor(0, 1, 3);
    let s5 = minor(0, 2, 3);

    let c0 = minor(2, 0, 1);
    let c1 = minor(2, 0, 2);
    let c2 = minor(2, 0, 3);
    let c3 = minor(2, 1, 2);
    let c4 = minor(2, 1, 3);
    let c5 = minor(2, 2, 3);

    let mut d = ops.multiply(&s0, &c5);
    d = ops.subtract(&d, &ops.multiply(&s1, &c4));
    d = ops.add(&d, &ops.multiply(&s2, &c3));
    d = ops.add(&d, &ops.multiply(&s3, &c2));
    d = ops.subtract(&d, &ops.multiply(&s4, &c1));
    ops.add(&d, &ops.multiply(&s5, &c0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::NumberOps;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_grid(rng: &mut StdRng, n: usize) -> Result<Grid<f64>, OpsError> {
        Ok(Grid::from_shape_fn([n, n], |_| rng.random_range(-10.0..10.0))?)
    }

    #[test]
    fn test_determinant_3x3() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([3, 3], vec![-2.0, 2.0, 3.0, -1.0, 1.0, 3.0, 2.0, 0.0, -1.0])?;
        let op = NumberOps::default();
        assert_eq!(determinant(&m, &op)?, 6.0);
        assert_eq!(cofactor_determinant(&m, &op)?, 6.0);
        Ok(())
    }

    #[test]
    fn test_determinant_4x4() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec(
            [4, 4],
            vec![
                1.0, 2.0, 3.0, -4.0, -5.0, -6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, -13.0, 14.0, 15.0,
                16.0,
            ],
        )?;
        let op = NumberOps::default();
        assert_relative_eq!(determinant(&m, &op)?, 25344.0, epsilon = 1e-9);
        assert_relative_eq!(cofactor_determinant(&m, &op)?, 25344.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_determinant_1x1_and_identity() -> Result<(), OpsError> {
        let op = NumberOps::default();
        let m = Grid::from_shape_vec([1, 1], vec![-3.5])?;
        assert_eq!(determinant(&m, &op)?, -3.5);

        let id = Grid::from_shape_fn([5, 5], |[r, c]| if r == c { 1.0 } else { 0.0 })?;
        assert_eq!(determinant(&id, &op)?, 1.0);
        Ok(())
    }

    #[test]
    fn test_determinant_not_square() -> Result<(), OpsError> {
        let m = Grid::from_shape_val([3, 2], 1.0)?;
        let op = NumberOps::default();
        assert_eq!(
            determinant(&m, &op),
            Err(OpsError::NotSquare { rows: 3, cols: 2 })
        );
        assert!(cofactor_determinant(&m, &op).is_err());
        Ok(())
    }

    #[test]
    fn test_determinant_zero_row() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([3, 3], vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let op = NumberOps::default();
        assert_eq!(cofactor_determinant(&m, &op)?, 0.0);
        assert_eq!(determinant(&m, &op)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_closed_form_matches_cofactor() -> Result<(), OpsError> {
        let mut rng = StdRng::seed_from_u64(7);
        let op = NumberOps::default();
        for n in 2..=4 {
            for _ in 0..50 {
                let m = random_grid(&mut rng, n)?;
                let fast = determinant_with_strategy(&m, &op, DeterminantStrategy::ClosedForm)?;
                let general = determinant_with_strategy(&m, &op, DeterminantStrategy::Cofactor)?;
                assert_relative_eq!(fast, general, epsilon = 1e-8, max_relative = 1e-10);
            }
        }
        Ok(())
    }

    #[test]
    fn test_determinant_5x5_falls_back() -> Result<(), OpsError> {
        // upper triangular: determinant is the product of the diagonal
        let m = Grid::from_shape_fn([5, 5], |[r, c]| {
            if r == c {
                (r + 1) as f64
            } else if c > r {
                2.0
            } else {
                0.0
            }
        })?;
        assert_relative_eq!(determinant(&m, &NumberOps::default())?, 120.0);
        Ok(())
    }

    #[test]
    fn test_determinant_f32() -> Result<(), OpsError> {
        let m = Grid::from_shape_vec([2, 2], vec![4.0f32, 7.0, 2.0, 6.0])?;
        assert_relative_eq!(determinant(&m, &NumberOps::default())?, 10.0f32);
        Ok(())
    }
}
