use std::ops::{Index, IndexMut};

use crate::error::GridError;
use crate::traverse::{Order, Traverse};

/// Computes the strides for a row-major grid layout.
///
/// The column stride is always 1 and the row stride is the number of columns.
///
/// # Examples
///
/// ```rust
/// use linmat_grid::grid::get_strides_from_shape;
///
/// // For a 2x3 grid: [[a, b, c], [d, e, f]]
/// assert_eq!(get_strides_from_shape([2, 3]), [3, 1]);
/// ```
pub fn get_strides_from_shape(shape: [usize; 2]) -> [usize; 2] {
    [shape[1], 1]
}

/// Returns the number of cells of a non-empty shape whose size fits in `usize`.
fn check_shape(shape: [usize; 2]) -> Result<usize, GridError> {
    match shape[0].checked_mul(shape[1]) {
        Some(numel) if numel > 0 => Ok(numel),
        _ => Err(GridError::invalid_dimensions(shape[0], shape[1])),
    }
}

/// A dense rectangular buffer addressed by `(row, col)`.
///
/// `Grid` owns a flat `Vec<T>` of exactly `rows * cols` elements stored in
/// row-major order. Column-major data is only accepted or produced at the
/// boundary through [`Order`]; the storage order never changes.
///
/// Every grid has at least one row and one column.
///
/// # Examples
///
/// ```rust
/// use linmat_grid::{Grid, Order};
///
/// let g = Grid::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(g.get(1, 0), Ok(&4));
/// assert_eq!(g.to_vec(Order::ColumnMajor), vec![1, 4, 2, 5, 3, 6]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    shape: [usize; 2],
    strides: [usize; 2],
}

impl<T> Grid<T> {
    /// Creates a new `Grid` with the given shape and row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if the shape is empty and
    /// [`GridError::InvalidShape`] if `data.len() != rows * cols`.
    pub fn from_shape_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, GridError> {
        let numel = check_shape(shape)?;
        if numel != data.len() {
            return Err(GridError::InvalidShape {
                expected: numel,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Grid` calling `f` with the `[row, col]` of every cell.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_grid::Grid;
    ///
    /// let g = Grid::from_shape_fn([2, 2], |[r, c]| r * 2 + c).unwrap();
    /// assert_eq!(g.as_slice(), &[0, 1, 2, 3]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; 2], mut f: F) -> Result<Self, GridError>
    where
        F: FnMut([usize; 2]) -> T,
    {
        let numel = check_shape(shape)?;
        let data = (0..numel)
            .map(|i| f([i / shape[1], i % shape[1]]))
            .collect();
        Ok(Self {
            data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    /// The shape as `[rows, cols]`.
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// The row-major strides as `[row_stride, col_stride]`.
    #[inline]
    pub fn strides(&self) -> [usize; 2] {
        self.strides
    }

    /// Returns the number of elements in the grid.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape[0] == self.shape[1]
    }

    /// The row-major data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The row-major data as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the grid and returns the row-major data.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates the elements in storage (row-major) order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn offset_unchecked(&self, row: usize, col: usize) -> usize {
        row * self.strides[0] + col * self.strides[1]
    }

    /// Get the storage offset of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if either index is outside the grid.
    pub fn get_offset(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.shape[0] {
            return Err(GridError::out_of_range(row, self.shape[0]));
        }
        if col >= self.shape[1] {
            return Err(GridError::out_of_range(col, self.shape[1]));
        }
        Ok(self.offset_unchecked(row, col))
    }

    /// Get a reference to the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let offset = self.get_offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Get a mutable reference to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let offset = self.get_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Overwrite the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Swap two rows in place.
    ///
    /// Swapping a row with itself is a no-op.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), GridError> {
        let rows = self.shape[0];
        if a >= rows {
            return Err(GridError::out_of_range(a, rows));
        }
        if b >= rows {
            return Err(GridError::out_of_range(b, rows));
        }
        if a == b {
            return Ok(());
        }
        let cols = self.shape[1];
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
        Ok(())
    }

    /// Traverse the cells as `(value, row, col)` in the requested order.
    ///
    /// The traversal order is independent of the storage order.
    pub fn traverse(&self, order: Order) -> Traverse<'_, T> {
        Traverse::new(self, order)
    }

    /// Apply `f` to every element and collect the results in a grid of the same shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            data: self.data.iter().map(f).collect(),
            shape: self.shape,
            strides: self.strides,
        }
    }

    /// Replace every element with `f(value, row, col)`.
    pub fn assign<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, usize, usize) -> T,
    {
        let cols = self.shape[1];
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = f(v, i / cols, i % cols);
        }
    }

    /// Combine two grids of identical shape element by element.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] if the shapes differ.
    pub fn element_wise_op<U, F>(&self, other: &Grid<T>, op: F) -> Result<Grid<U>, GridError>
    where
        F: Fn(&T, &T) -> U,
    {
        if self.shape != other.shape {
            return Err(GridError::DimensionMismatch {
                expected: self.shape,
                actual: other.shape,
            });
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| op(a, b))
            .collect();

        Ok(Grid {
            data,
            shape: self.shape,
            strides: self.strides,
        })
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a new `Grid` with every cell set to `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_grid::Grid;
    ///
    /// let g = Grid::from_shape_val([2, 2], 1).unwrap();
    /// assert_eq!(g.as_slice(), &[1, 1, 1, 1]);
    /// ```
    pub fn from_shape_val(shape: [usize; 2], value: T) -> Result<Self, GridError> {
        let numel = check_shape(shape)?;
        Ok(Self {
            data: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Creates a new `Grid` from column-major data.
    pub fn from_col_major_vec(shape: [usize; 2], data: Vec<T>) -> Result<Self, GridError> {
        // a column-major r x c buffer is the row-major buffer of its c x r transpose
        let transposed = Grid::from_shape_vec([shape[1], shape[0]], data)?;
        Ok(transposed.transposed())
    }

    /// Creates a new `Grid` from row-major values, inferring the row count.
    ///
    /// The grid gets `ceil(values.len() / cols)` rows and the missing trailing
    /// cells are filled with `T::default()`.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_grid::Grid;
    ///
    /// let g = Grid::from_row_major(&[1, 2, 3, 4, 5], 2).unwrap();
    /// assert_eq!(g.shape(), [3, 2]);
    /// assert_eq!(g.as_slice(), &[1, 2, 3, 4, 5, 0]);
    /// ```
    pub fn from_row_major(values: &[T], cols: usize) -> Result<Self, GridError>
    where
        T: Default,
    {
        if cols == 0 {
            return Err(GridError::invalid_dimensions(values.len(), cols));
        }
        let rows = values.len().div_ceil(cols);
        let numel = check_shape([rows, cols])?;

        let mut data = values.to_vec();
        data.resize(numel, T::default());
        Self::from_shape_vec([rows, cols], data)
    }

    /// Returns an independent copy of row `i`.
    pub fn row(&self, i: usize) -> Result<Vec<T>, GridError> {
        if i >= self.shape[0] {
            return Err(GridError::out_of_range(i, self.shape[0]));
        }
        let cols = self.shape[1];
        Ok(self.data[i * cols..(i + 1) * cols].to_vec())
    }

    /// Returns an independent copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Vec<T>, GridError> {
        if j >= self.shape[1] {
            return Err(GridError::out_of_range(j, self.shape[1]));
        }
        Ok((0..self.shape[0])
            .map(|r| self.data[self.offset_unchecked(r, j)].clone())
            .collect())
    }

    /// Returns a wrapping diagonal with one element per row, starting at column `col`.
    ///
    /// The forward diagonal walks `(r, col + r)` and the reverse diagonal walks
    /// `(r, col - r)`, both wrapping around the column count.
    pub fn diagonal(&self, col: usize, reverse: bool) -> Result<Vec<T>, GridError> {
        let [rows, cols] = self.shape;
        if col >= cols {
            return Err(GridError::out_of_range(col, cols));
        }
        Ok((0..rows)
            .map(|r| {
                let c = if reverse {
                    (col + cols - r % cols) % cols
                } else {
                    (col + r) % cols
                };
                self.data[self.offset_unchecked(r, c)].clone()
            })
            .collect())
    }

    /// Transpose the grid in place, permuting the storage.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Returns the transposed grid, leaving `self` untouched.
    pub fn transposed(&self) -> Self {
        let shape = [self.shape[1], self.shape[0]];
        Self {
            data: self.to_vec(Order::ColumnMajor),
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Write the transpose of `self` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] unless `target` is `cols x rows`.
    pub fn transpose_into(&self, target: &mut Grid<T>) -> Result<(), GridError> {
        let expected = [self.shape[1], self.shape[0]];
        if target.shape != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: target.shape,
            });
        }
        for (dst, (v, _, _)) in target
            .data
            .iter_mut()
            .zip(self.traverse(Order::ColumnMajor))
        {
            *dst = v.clone();
        }
        Ok(())
    }

    /// Extract the `rows x cols` region whose top-left cell is `(row_start, col_start)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if the region is empty or
    /// does not fit inside the grid.
    pub fn submatrix(
        &self,
        row_start: usize,
        col_start: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self, GridError> {
        check_shape([rows, cols])?;
        if row_start + rows > self.shape[0] || col_start + cols > self.shape[1] {
            return Err(GridError::invalid_dimensions(row_start + rows, col_start + cols));
        }
        Self::from_shape_fn([rows, cols], |[r, c]| {
            self.data[self.offset_unchecked(row_start + r, col_start + c)].clone()
        })
    }

    /// Returns a copy of the grid without the given row and/or column.
    ///
    /// Passing `None` for both returns an unchanged copy.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] for an index outside the grid and
    /// [`GridError::InvalidDimensions`] if the removal would leave no cells.
    pub fn remove_row_col(&self, row: Option<usize>, col: Option<usize>) -> Result<Self, GridError> {
        let [rows, cols] = self.shape;
        if let Some(r) = row {
            if r >= rows {
                return Err(GridError::out_of_range(r, rows));
            }
        }
        if let Some(c) = col {
            if c >= cols {
                return Err(GridError::out_of_range(c, cols));
            }
        }

        let shape = [
            rows - usize::from(row.is_some()),
            cols - usize::from(col.is_some()),
        ];
        check_shape(shape)?;

        let data = self
            .traverse(Order::RowMajor)
            .filter(|&(_, r, c)| Some(r) != row && Some(c) != col)
            .map(|(v, _, _)| v.clone())
            .collect();
        Self::from_shape_vec(shape, data)
    }

    /// Copy the grid values into a flat vector in the requested order.
    pub fn to_vec(&self, order: Order) -> Vec<T> {
        match order {
            Order::RowMajor => self.data.clone(),
            Order::ColumnMajor => self.traverse(order).map(|(v, _, _)| v.clone()).collect(),
        }
    }

    /// Copy the grid values into nested vectors: rows of values for
    /// [`Order::RowMajor`], columns of values for [`Order::ColumnMajor`].
    pub fn to_nested(&self, order: Order) -> Vec<Vec<T>> {
        match order {
            Order::RowMajor => self.data.chunks(self.shape[1]).map(<[T]>::to_vec).collect(),
            Order::ColumnMajor => self
                .to_vec(order)
                .chunks(self.shape[0])
                .map(<[T]>::to_vec)
                .collect(),
        }
    }

    /// Overwrite all cells from row-major `values`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidShape`] if `values.len()` differs from the element count.
    pub fn copy_from(&mut self, values: &[T]) -> Result<(), GridError> {
        if values.len() != self.data.len() {
            return Err(GridError::InvalidShape {
                expected: self.data.len(),
                actual: values.len(),
            });
        }
        self.data.clone_from_slice(values);
        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> Index<[usize; 2]> for Grid<T> {
    type Output = T;

    fn index(&self, [row, col]: [usize; 2]) -> &Self::Output {
        assert!(
            row < self.shape[0] && col < self.shape[1],
            "index [{row}, {col}] out of bounds for grid of shape {:?}",
            self.shape
        );
        &self.data[self.offset_unchecked(row, col)]
    }
}

impl<T> IndexMut<[usize; 2]> for Grid<T> {
    fn index_mut(&mut self, [row, col]: [usize; 2]) -> &mut Self::Output {
        assert!(
            row < self.shape[0] && col < self.shape[1],
            "index [{row}, {col}] out of bounds for grid of shape {:?}",
            self.shape
        );
        let offset = self.offset_unchecked(row, col);
        &mut self.data[offset]
    }
}
