use std::ops::{Index, IndexMut};

use linmat_grid::{Grid, Order, Traverse};
use linmat_ops::{
    determinant::determinant_with_strategy, interpolation, inverse, product, DeterminantStrategy,
    Operations, OpsError, Scalar, Weight,
};

use crate::{
    error::AlgebraError,
    homogeneous,
    operand::{Operand, Product},
    vector::Vector,
};

/// A matrix of any size, stored as a row-major [`Grid`].
///
/// A `rows x cols` matrix maps `cols`-dimensional vectors to
/// `rows`-dimensional ones. Methods returning a `Matrix` allocate a new one;
/// [`Matrix::transpose_mut`], [`Matrix::apply`] and [`Matrix::invert`] work in
/// place, while the `*_into` methods write into a caller-provided target.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    grid: Grid<T>,
}

impl<T: Scalar> Matrix<T> {
    fn ops() -> T::Ops {
        T::Ops::default()
    }

    /// Wrap an existing grid.
    pub fn from_grid(grid: Grid<T>) -> Self {
        Self { grid }
    }

    /// A `rows x cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(Grid::from_shape_val(
            [rows, cols],
            Self::ops().zero(),
        )?))
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(product::identity_grid(n, &Self::ops())?))
    }

    /// Create a matrix from row-major values with `cols` columns.
    ///
    /// The row count is inferred; an incomplete last row is filled with zeros.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_algebra::Matrix;
    ///
    /// let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(m.shape(), [2, 2]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
    /// ```
    pub fn from_rows(cols: usize, values: &[T]) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(Grid::from_row_major(values, cols)?))
    }

    /// Create a matrix from exactly `rows * cols` row-major values.
    pub fn from_shape_vec(shape: [usize; 2], values: Vec<T>) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(Grid::from_shape_vec(shape, values)?))
    }

    /// Create a matrix from exactly `rows * cols` column-major values.
    pub fn from_col_major(shape: [usize; 2], values: Vec<T>) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(Grid::from_col_major_vec(shape, values)?))
    }

    /// Create a matrix whose columns are the given vectors.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the vectors differ in
    /// dimension, or a grid error when no vector is given.
    pub fn from_vectors(columns: &[Vector<T>]) -> Result<Self, AlgebraError> {
        let rows = columns.first().map_or(0, Vector::dim);
        if let Some(v) = columns.iter().find(|v| v.dim() != rows) {
            return Err(AlgebraError::DimensionMismatch {
                expected: rows,
                actual: v.dim(),
            });
        }
        let values = columns.iter().flat_map(|v| v.iter().cloned()).collect();
        Self::from_col_major([rows, columns.len()], values)
    }

    /// The underlying grid.
    #[inline]
    pub fn as_grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Consume the matrix and return its grid.
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.grid.shape()
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.grid.is_square()
    }

    /// The row-major values.
    pub fn as_slice(&self) -> &[T] {
        self.grid.as_slice()
    }

    /// Get the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, AlgebraError> {
        Ok(self.grid.get(row, col)?)
    }

    /// Set the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), AlgebraError> {
        Ok(self.grid.set(row, col, value)?)
    }

    /// Copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<T>, AlgebraError> {
        Ok(self.grid.row(i)?)
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Vec<T>, AlgebraError> {
        Ok(self.grid.col(j)?)
    }

    /// Wrapping diagonal starting at column `col`, see [`Grid::diagonal`].
    pub fn diagonal(&self, col: usize, reverse: bool) -> Result<Vec<T>, AlgebraError> {
        Ok(self.grid.diagonal(col, reverse)?)
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_grid(self.grid.transposed())
    }

    /// Transpose in place.
    pub fn transpose_mut(&mut self) {
        self.grid.transpose();
    }

    /// Write the transpose into `target`, which must be `cols x rows`.
    pub fn transpose_into(&self, target: &mut Matrix<T>) -> Result<(), AlgebraError> {
        Ok(self.grid.transpose_into(&mut target.grid)?)
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix<T>) -> Result<Self, AlgebraError> {
        let op = Self::ops();
        Ok(Self::from_grid(
            self.grid.element_wise_op(&other.grid, |a, b| op.add(a, b))?,
        ))
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Matrix<T>) -> Result<Self, AlgebraError> {
        let op = Self::ops();
        Ok(Self::from_grid(
            self.grid
                .element_wise_op(&other.grid, |a, b| op.subtract(a, b))?,
        ))
    }

    /// Multiply every value by `factor`.
    pub fn scale(&self, factor: &T) -> Self {
        let op = Self::ops();
        Self::from_grid(self.grid.map(|v| op.multiply(v, factor)))
    }

    /// Flip the sign of every value.
    pub fn negate(&self) -> Self {
        let op = Self::ops();
        Self::from_grid(self.grid.map(|v| op.negate(v)))
    }

    /// Clamp every value to `[min, max]`.
    pub fn clamp(&self, min: &T, max: &T) -> Self {
        let op = Self::ops();
        Self::from_grid(self.grid.map(|v| interpolation::clamp(v, min, max, &op)))
    }

    /// Product with a matrix, a vector or a raw sequence.
    ///
    /// - matrix: ordinary matrix product, [`Product::Matrix`].
    /// - vector: `self · v` as a column vector, [`Product::Vector`] with the
    ///   dimension of `v`.
    /// - raw sequence: like a vector, [`Product::Raw`] with the length of the
    ///   sequence.
    ///
    /// A vector or sequence shorter than the column count is padded with zeros
    /// and a trailing one before the product, so a 2D point can be transformed
    /// by a 3x3 affine matrix. The result is truncated (or zero-extended) back to
    /// the length of the operand.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch when the matrix columns do not match the
    /// rows of a right-hand matrix, or when the operand has more components
    /// than the matrix has columns.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_algebra::{Matrix, Vector};
    ///
    /// let t = Matrix::from_rows(3, &[1.0, 0.0, 2.0, 0.0, 1.0, -3.0, 0.0, 0.0, 1.0]).unwrap();
    /// let p = t.dot(&Vector::vec2(1.0, 1.0)).unwrap().into_vector().unwrap();
    /// assert_eq!(p, Vector::vec2(3.0, -2.0));
    /// ```
    pub fn dot<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Product<T>, AlgebraError>
    where
        T: 'a,
    {
        let op = Self::ops();
        match other.into() {
            Operand::Matrix(m) => Ok(Product::Matrix(self.matmul(m)?)),
            Operand::Vector(v) => {
                let values = homogeneous::matrix_times(&self.grid, v.as_slice(), &op)?;
                Ok(Product::Vector(Vector::from_vec(values)?))
            }
            Operand::Raw(values) => Ok(Product::Raw(homogeneous::matrix_times(
                &self.grid, values, &op,
            )?)),
        }
    }

    /// Matrix product `self · other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(product::matmul(
            &self.grid,
            &other.grid,
            &Self::ops(),
        )?))
    }

    /// `self · v` with homogeneous padding, see [`Matrix::dot`].
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>, AlgebraError> {
        let values = homogeneous::matrix_times(&self.grid, v.as_slice(), &Self::ops())?;
        Vector::from_vec(values)
    }

    /// Replace `self` with `self · other`.
    pub fn apply(&mut self, other: &Matrix<T>) -> Result<(), AlgebraError> {
        *self = self.matmul(other)?;
        Ok(())
    }

    /// Extract a `rows x cols` region starting at `(row_start, col_start)`.
    pub fn submatrix(
        &self,
        row_start: usize,
        col_start: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(
            self.grid.submatrix(row_start, col_start, rows, cols)?,
        ))
    }

    /// Copy without the given row and/or column.
    pub fn remove_row_col(
        &self,
        row: Option<usize>,
        col: Option<usize>,
    ) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(self.grid.remove_row_col(row, col)?))
    }

    /// Determinant with the scalar's default operation set and the closed-form fast paths.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_algebra::Matrix;
    ///
    /// let m = Matrix::from_rows(3, &[-2.0, 2.0, 3.0, -1.0, 1.0, 3.0, 2.0, 0.0, -1.0]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 6.0);
    /// ```
    pub fn determinant(&self) -> Result<T, AlgebraError> {
        self.determinant_with(&Self::ops(), DeterminantStrategy::default())
    }

    /// Determinant with an explicit operation set and strategy.
    pub fn determinant_with<O: Operations<Scalar = T>>(
        &self,
        ops: &O,
        strategy: DeterminantStrategy,
    ) -> Result<T, AlgebraError> {
        Ok(determinant_with_strategy(&self.grid, ops, strategy)?)
    }

    /// Inverse by Gauss-Jordan elimination.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::NotSquare`] or [`OpsError::NotInvertible`] wrapped in
    /// [`AlgebraError::Ops`].
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        self.inverse_with(&Self::ops())
    }

    /// Inverse with an explicit operation set.
    pub fn inverse_with<O: Operations<Scalar = T>>(&self, ops: &O) -> Result<Self, AlgebraError> {
        Ok(Self::from_grid(inverse::inverse(&self.grid, ops)?))
    }

    /// Invert in place. `self` is left unchanged when the matrix is singular.
    pub fn invert(&mut self) -> Result<(), AlgebraError> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Write the inverse into `target`, which must have the shape of `self`.
    pub fn inverse_into(&self, target: &mut Matrix<T>) -> Result<(), AlgebraError> {
        Ok(inverse::inverse_into(
            &self.grid,
            &Self::ops(),
            &mut target.grid,
        )?)
    }

    fn from_values_like(&self, values: Vec<T>) -> Result<Self, AlgebraError> {
        Self::from_shape_vec(self.shape(), values)
    }

    /// Element-wise linear interpolation towards `other`.
    ///
    /// `t` is either one weight for every value or one weight per value in
    /// row-major order.
    pub fn mix<'w>(
        &self,
        other: &Matrix<T>,
        t: impl Into<Weight<'w, T>>,
    ) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        if other.shape() != self.shape() {
            return Err(OpsError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            }
            .into());
        }
        let values =
            interpolation::mix_each(self.as_slice(), other.as_slice(), t.into(), &Self::ops())?;
        self.from_values_like(values)
    }

    /// Element-wise [`interpolation::step`].
    pub fn step<'w>(&self, edge: impl Into<Weight<'w, T>>) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        let values = interpolation::step_each(edge.into(), self.as_slice(), &Self::ops())?;
        self.from_values_like(values)
    }

    /// Element-wise [`interpolation::smoothstep`].
    pub fn smoothstep<'w>(
        &self,
        edge0: impl Into<Weight<'w, T>>,
        edge1: impl Into<Weight<'w, T>>,
    ) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        let values = interpolation::smoothstep_each(
            edge0.into(),
            edge1.into(),
            self.as_slice(),
            &Self::ops(),
        )?;
        self.from_values_like(values)
    }

    /// Flat copy of the values in the requested order.
    pub fn to_vec(&self, order: Order) -> Vec<T> {
        self.grid.to_vec(order)
    }

    /// Nested copy: rows for [`Order::RowMajor`], columns for [`Order::ColumnMajor`].
    pub fn to_nested(&self, order: Order) -> Vec<Vec<T>> {
        self.grid.to_nested(order)
    }

    /// Traverse `(value, row, col)` in the requested order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        self.grid.traverse(order)
    }
}

impl<T> Index<[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, index: [usize; 2]) -> &T {
        &self.grid[index]
    }
}

impl<T> IndexMut<[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut T {
        &mut self.grid[index]
    }
}

impl<T> From<Grid<T>> for Matrix<T> {
    fn from(grid: Grid<T>) -> Self {
        Self { grid }
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Matrix<T>
where
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.grid.shape() == other.grid.shape()
            && self
                .grid
                .iter()
                .zip(other.grid.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Matrix<T>
where
    T::Epsilon: Clone,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.grid.shape() == other.grid.shape()
            && self
                .grid
                .iter()
                .zip(other.grid.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use linmat_grid::GridError;
    use linmat_ops::NumberOps;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn assert_slice_eq(a: &[f64], b: &[f64], epsilon: f64) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(*x, *y, epsilon = epsilon);
        }
    }

    #[test]
    fn test_constructors() -> Result<(), AlgebraError> {
        let z = Matrix::<f64>::zeros(2, 3)?;
        assert_eq!(z.shape(), [2, 3]);
        assert!(z.as_slice().iter().all(|v| *v == 0.0));

        let id = Matrix::<f64>::identity(3)?;
        assert_eq!(id.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let m = Matrix::from_col_major([2, 3], vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0])?;
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        assert_eq!(
            Matrix::<f64>::zeros(0, 3),
            Err(AlgebraError::Grid(GridError::InvalidDimensions {
                rows: 0,
                cols: 3
            }))
        );
        Ok(())
    }

    #[test]
    fn test_from_vectors() -> Result<(), AlgebraError> {
        let m = Matrix::from_vectors(&[
            Vector::vec3(1.0, 2.0, 3.0),
            Vector::vec3(4.0, 5.0, 6.0),
        ])?;
        assert_eq!(m.shape(), [3, 2]);
        assert_eq!(m.col(1)?, vec![4.0, 5.0, 6.0]);
        assert_eq!(m.row(0)?, vec![1.0, 4.0]);

        assert_eq!(
            Matrix::from_vectors(&[Vector::vec3(1.0, 2.0, 3.0), Vector::vec2(4.0, 5.0)]),
            Err(AlgebraError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(Matrix::<f64>::from_vectors(&[]).is_err());
        Ok(())
    }

    #[test]
    fn test_access() -> Result<(), AlgebraError> {
        let mut m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0])?;
        m.set(1, 0, 9.0)?;
        assert_eq!(*m.get(1, 0)?, 9.0);
        assert_eq!(m[[1, 0]], 9.0);
        m[[0, 1]] = 7.0;
        assert_eq!(m.row(0)?, vec![1.0, 7.0]);
        assert_eq!(m.diagonal(0, false)?, vec![1.0, 4.0]);
        assert!(m.get(2, 0).is_err());
        Ok(())
    }

    #[test]
    fn test_transpose() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let t = m.transpose();
        assert_eq!(t.shape(), [3, 2]);
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);

        let mut target = Matrix::zeros(3, 2)?;
        m.transpose_into(&mut target)?;
        assert_eq!(target, t);

        let mut wrong = Matrix::zeros(2, 3)?;
        assert!(m.transpose_into(&mut wrong).is_err());

        let mut n = m.clone();
        n.transpose_mut();
        n.transpose_mut();
        assert_eq!(n, m);
        Ok(())
    }

    #[test]
    fn test_transpose_twice_random() -> Result<(), AlgebraError> {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let rows = rng.random_range(1..6);
            let cols = rng.random_range(1..6);
            let values = (0..rows * cols).map(|_| rng.random_range(-5.0..5.0)).collect();
            let m: Matrix<f64> = Matrix::from_shape_vec([rows, cols], values)?;
            assert_eq!(m.transpose().transpose(), m);
        }
        Ok(())
    }

    #[test]
    fn test_arithmetic() -> Result<(), AlgebraError> {
        let a = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0])?;
        let b = Matrix::from_rows(2, &[0.5, 0.5, -1.0, 1.0])?;
        assert_eq!(a.add(&b)?.as_slice(), &[1.5, 2.5, 2.0, 5.0]);
        assert_eq!(a.sub(&b)?.as_slice(), &[0.5, 1.5, 4.0, 3.0]);
        assert_eq!(a.scale(&2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(a.negate().as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
        assert_eq!(a.clamp(&2.0, &3.0).as_slice(), &[2.0, 2.0, 3.0, 3.0]);
        assert!(a.add(&Matrix::zeros(2, 3)?).is_err());
        Ok(())
    }

    #[test]
    fn test_dot_matrix() -> Result<(), AlgebraError> {
        let s = Matrix::from_rows(3, &[2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0])?;
        let t = Matrix::from_rows(3, &[1.0, 0.0, 2.0, 0.0, 1.0, -3.0, 0.0, 0.0, 1.0])?;
        let st = s.dot(&t)?.into_matrix();
        assert_eq!(
            st.map(|m| m.into_grid().into_vec()),
            Some(vec![2.0, 0.0, 4.0, 0.0, 2.0, -6.0, 0.0, 0.0, 1.0])
        );

        let mut applied = s.clone();
        applied.apply(&t)?;
        assert_eq!(applied, s.matmul(&t)?);

        let r = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(
            r.dot(&r),
            Err(AlgebraError::Ops(OpsError::DimensionMismatch {
                left: [2, 3],
                right: [2, 3]
            }))
        );
        Ok(())
    }

    #[test]
    fn test_dot_vector_padding() -> Result<(), AlgebraError> {
        let s = Matrix::from_rows(3, &[2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0])?;
        assert_eq!(
            s.dot(&Vector::vec2(2.0, -1.5))?,
            Product::Vector(Vector::vec2(4.0, -3.0))
        );
        assert_eq!(s.dot(&[-3.0, 2.0])?, Product::Raw(vec![-6.0, 4.0]));
        assert_eq!(s.mul_vector(&Vector::vec3(1.0, 1.0, 1.0))?, Vector::vec3(2.0, 2.0, 1.0));

        // a 3x2 matrix maps a 2D vector to three components, truncated back to two
        let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(m.mul_vector(&Vector::vec2(1.0, 1.0))?, Vector::vec2(3.0, 7.0));

        // a 2x3 matrix yields two components, zero-extended to three
        let w = Matrix::from_rows(3, &[1.0, 0.0, 1.0, 0.0, 1.0, 1.0])?;
        assert_eq!(
            w.mul_vector(&Vector::vec3(1.0, 2.0, 3.0))?,
            Vector::vec3(4.0, 5.0, 0.0)
        );

        assert_eq!(
            Matrix::<f64>::identity(2)?.mul_vector(&Vector::vec3(1.0, 2.0, 3.0)),
            Err(AlgebraError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        Ok(())
    }

    #[test]
    fn test_submatrix_and_remove() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])?;
        assert_eq!(m.submatrix(1, 1, 2, 2)?.as_slice(), &[5.0, 6.0, 8.0, 9.0]);
        assert_eq!(
            m.remove_row_col(Some(1), Some(0))?.as_slice(),
            &[2.0, 3.0, 8.0, 9.0]
        );
        assert!(m.submatrix(2, 2, 2, 2).is_err());
        Ok(())
    }

    #[test]
    fn test_determinant() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(3, &[-2.0, 2.0, 3.0, -1.0, 1.0, 3.0, 2.0, 0.0, -1.0])?;
        assert_eq!(m.determinant()?, 6.0);
        assert_eq!(
            m.determinant_with(&NumberOps::default(), DeterminantStrategy::Cofactor)?,
            6.0
        );
        assert_eq!(
            Matrix::<f64>::zeros(2, 3)?.determinant(),
            Err(AlgebraError::Ops(OpsError::NotSquare { rows: 2, cols: 3 }))
        );
        Ok(())
    }

    #[test]
    fn test_inverse() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(2, &[4.0, 7.0, 2.0, 6.0])?;
        assert_slice_eq(m.inverse()?.as_slice(), &[0.6, -0.7, -0.2, 0.4], 1e-12);

        let mut target = Matrix::zeros(2, 2)?;
        m.inverse_into(&mut target)?;
        assert_slice_eq(target.as_slice(), &[0.6, -0.7, -0.2, 0.4], 1e-12);

        let mut n = m.clone();
        n.invert()?;
        n.invert()?;
        assert_slice_eq(n.as_slice(), m.as_slice(), 1e-12);

        let mut singular = Matrix::from_rows(2, &[1.0, 2.0, 2.0, 4.0])?;
        let before = singular.clone();
        assert_eq!(
            singular.invert(),
            Err(AlgebraError::Ops(OpsError::NotInvertible { pivot: 1 }))
        );
        assert_eq!(singular, before);

        let loose = NumberOps::with_epsilon(0.5);
        let nearly = Matrix::from_rows(2, &[0.1, 0.0, 0.0, 1.0])?;
        assert!(nearly.inverse().is_ok());
        assert!(nearly.inverse_with(&loose).is_err());
        Ok(())
    }

    #[test]
    fn test_interpolation() -> Result<(), AlgebraError> {
        let a = Matrix::from_rows(2, &[0.0, 0.0, 0.0, 0.0])?;
        let b = Matrix::from_rows(2, &[4.0, 8.0, -4.0, 2.0])?;
        assert_eq!(a.mix(&b, &0.0)?, a);
        assert_eq!(a.mix(&b, &1.0)?, b);
        assert_eq!(a.mix(&b, &0.25)?.as_slice(), &[1.0, 2.0, -1.0, 0.5]);
        assert_eq!(
            a.mix(&b, &[0.0, 1.0, 0.0, 1.0][..])?.as_slice(),
            &[0.0, 8.0, 0.0, 2.0]
        );
        assert!(a.mix(&b, &[0.0, 1.0][..]).is_err());
        assert!(a.mix(&Matrix::zeros(1, 4)?, &0.5).is_err());

        assert_eq!(b.step(&2.0)?.as_slice(), &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(
            b.smoothstep(&0.0, &8.0)?.as_slice(),
            &[0.5, 1.0, 0.0, 0.15625]
        );
        Ok(())
    }

    #[test]
    fn test_export() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        assert_eq!(m.to_vec(Order::RowMajor), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.to_vec(Order::ColumnMajor), vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(
            m.to_nested(Order::RowMajor),
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]
        );
        let cells: Vec<_> = m.traverse(Order::ColumnMajor).map(|(_, r, c)| (r, c)).collect();
        assert_eq!(cells[..3], [(0, 0), (1, 0), (2, 0)]);
        Ok(())
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_relative_eq() -> Result<(), AlgebraError> {
        let m = Matrix::from_rows(2, &[4.0, 7.0, 2.0, 6.0])?;
        let id = m.matmul(&m.inverse()?)?;
        assert_relative_eq!(id, Matrix::identity(2)?, epsilon = 1e-12);
        Ok(())
    }
}
