use std::ops::{Index, IndexMut};

use linmat_grid::GridError;
use linmat_ops::{interpolation, Operations, Scalar, Weight};
use num_traits::Float;

use crate::{
    error::AlgebraError,
    homogeneous,
    operand::{Operand, Product},
};

/// Smallest number of components of a [`Vector`].
pub const MIN_DIM: usize = 2;

/// Largest number of components of a [`Vector`].
pub const MAX_DIM: usize = 4;

/// Component names accepted by swizzle patterns and [`Vector::component`].
///
/// Every row names the components `0..4` of the same storage.
pub const SWIZZLE_ALIASES: [[char; MAX_DIM]; 4] = [
    ['x', 'y', 'z', 'w'],
    ['r', 'g', 'b', 'a'],
    ['s', 't', 'u', 'v'],
    ['i', 'j', 'k', 'l'],
];

/// Map a component name to its index.
pub fn alias_index(letter: char) -> Option<usize> {
    SWIZZLE_ALIASES
        .iter()
        .find_map(|names| names.iter().position(|&n| n == letter))
}

fn check_dim(dim: usize) -> Result<(), AlgebraError> {
    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(AlgebraError::InvalidDimensions { dim });
    }
    Ok(())
}

fn check_len(expected: usize, actual: usize) -> Result<(), AlgebraError> {
    if expected != actual {
        return Err(AlgebraError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

/// A vector with two, three or four components.
///
/// Components are addressed by index or by name through [`SWIZZLE_ALIASES`].
/// Methods that return a `Vector` leave `self` untouched; the `*_mut` methods,
/// [`Vector::normalize`], [`Vector::swap`] and [`Vector::copy_from`] write into
/// `self`.
///
/// All arithmetic goes through the default operation set of the scalar type,
/// see [`Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    fn ops() -> T::Ops {
        T::Ops::default()
    }

    /// Create a vector owning `values`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidDimensions`] unless there are 2 to 4 values.
    pub fn from_vec(values: Vec<T>) -> Result<Self, AlgebraError> {
        check_dim(values.len())?;
        Ok(Self { values })
    }

    /// Create a vector from a slice of 2 to 4 values.
    pub fn from_slice(values: &[T]) -> Result<Self, AlgebraError> {
        Self::from_vec(values.to_vec())
    }

    /// Create a vector of `dim` zeros.
    pub fn zeros(dim: usize) -> Result<Self, AlgebraError> {
        check_dim(dim)?;
        Ok(Self {
            values: vec![Self::ops().zero(); dim],
        })
    }

    /// Create a 2D vector.
    pub fn vec2(x: T, y: T) -> Self {
        Self { values: vec![x, y] }
    }

    /// Create a 3D vector.
    pub fn vec3(x: T, y: T, z: T) -> Self {
        Self {
            values: vec![x, y, z],
        }
    }

    /// Create a 4D vector.
    pub fn vec4(x: T, y: T, z: T, w: T) -> Self {
        Self {
            values: vec![x, y, z, w],
        }
    }

    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    /// The components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Copy the components into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Consume the vector and return its components.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Iterate over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Get component `i`.
    pub fn get(&self, i: usize) -> Result<&T, AlgebraError> {
        self.values
            .get(i)
            .ok_or_else(|| GridError::out_of_range(i, self.dim()).into())
    }

    /// Overwrite component `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<(), AlgebraError> {
        let dim = self.dim();
        let slot = self
            .values
            .get_mut(i)
            .ok_or(GridError::out_of_range(i, dim))?;
        *slot = value;
        Ok(())
    }

    /// The first component.
    #[inline]
    pub fn x(&self) -> &T {
        &self.values[0]
    }

    /// The second component.
    #[inline]
    pub fn y(&self) -> &T {
        &self.values[1]
    }

    /// The third component, if the vector has one.
    #[inline]
    pub fn z(&self) -> Option<&T> {
        self.values.get(2)
    }

    /// The fourth component, if the vector has one.
    #[inline]
    pub fn w(&self) -> Option<&T> {
        self.values.get(3)
    }

    /// Get a component by name, e.g. `'g'` for the second component.
    pub fn component(&self, letter: char) -> Result<&T, AlgebraError> {
        alias_index(letter)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| AlgebraError::InvalidSwizzlePattern {
                pattern: letter.to_string(),
                letter,
            })
    }

    fn zip_with<V, F>(&self, other: &V, f: F) -> Result<Self, AlgebraError>
    where
        V: AsRef<[T]> + ?Sized,
        F: Fn(&T, &T) -> T,
    {
        let other = other.as_ref();
        check_len(self.dim(), other.len())?;
        Ok(Self {
            values: self.values.iter().zip(other).map(|(a, b)| f(a, b)).collect(),
        })
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the component counts differ.
    pub fn add<V: AsRef<[T]> + ?Sized>(&self, other: &V) -> Result<Self, AlgebraError> {
        let op = Self::ops();
        self.zip_with(other, |a, b| op.add(a, b))
    }

    /// Component-wise difference.
    pub fn sub<V: AsRef<[T]> + ?Sized>(&self, other: &V) -> Result<Self, AlgebraError> {
        let op = Self::ops();
        self.zip_with(other, |a, b| op.subtract(a, b))
    }

    /// In-place [`Vector::add`].
    pub fn add_mut<V: AsRef<[T]> + ?Sized>(&mut self, other: &V) -> Result<(), AlgebraError> {
        *self = self.add(other)?;
        Ok(())
    }

    /// In-place [`Vector::sub`].
    pub fn sub_mut<V: AsRef<[T]> + ?Sized>(&mut self, other: &V) -> Result<(), AlgebraError> {
        *self = self.sub(other)?;
        Ok(())
    }

    /// Multiply every component by `factor`.
    pub fn scale(&self, factor: &T) -> Self {
        let op = Self::ops();
        Self {
            values: self.values.iter().map(|v| op.multiply(v, factor)).collect(),
        }
    }

    /// In-place [`Vector::scale`].
    pub fn scale_mut(&mut self, factor: &T) {
        let op = Self::ops();
        for v in self.values.iter_mut() {
            *v = op.multiply(v, factor);
        }
    }

    /// Component-wise (Hadamard) product.
    pub fn scale_by<V: AsRef<[T]> + ?Sized>(&self, factors: &V) -> Result<Self, AlgebraError> {
        let op = Self::ops();
        self.zip_with(factors, |a, b| op.multiply(a, b))
    }

    /// Flip the sign of every component.
    pub fn negate(&self) -> Self {
        let op = Self::ops();
        Self {
            values: self.values.iter().map(|v| op.negate(v)).collect(),
        }
    }

    /// Dot product with a vector, a raw sequence or a matrix.
    ///
    /// - vector or raw sequence of the same dimension: [`Product::Scalar`].
    /// - matrix: the vector is treated as a row vector and multiplied from the
    ///   left, giving a [`Product::Vector`]. When the vector is shorter than the
    ///   matrix has rows it is padded with zeros and a trailing one, and the
    ///   result is truncated or zero-extended back to the vector's dimension.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] if the component counts
    /// differ, or if the vector is longer than the matrix has rows.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_algebra::Vector;
    ///
    /// let a = Vector::vec3(2.0, -2.0, 1.0);
    /// let b = Vector::vec3(-3.5, 1.5, -3.0);
    /// assert_eq!(a.dot(&b).unwrap().into_scalar(), Some(-13.0));
    /// ```
    pub fn dot<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Product<T>, AlgebraError>
    where
        T: 'a,
    {
        let op = Self::ops();
        let components = match other.into() {
            Operand::Matrix(m) => {
                let values = homogeneous::times_matrix(&self.values, m.as_grid(), &op)?;
                return Ok(Product::Vector(Self { values }));
            }
            Operand::Vector(v) => v.as_slice(),
            Operand::Raw(values) => values,
        };

        check_len(self.dim(), components.len())?;
        let sum = self
            .values
            .iter()
            .zip(components)
            .fold(op.zero(), |acc, (a, b)| op.add(&acc, &op.multiply(a, b)));
        Ok(Product::Scalar(sum))
    }

    /// Cross product.
    ///
    /// 2D vectors give the signed area `a.x * b.y - a.y * b.x` as a
    /// [`Product::Scalar`]. 3D vectors give the usual [`Product::Vector`]. For
    /// 4D vectors only the first three components take part and the fourth
    /// component of the result is zero.
    pub fn cross(&self, other: &Vector<T>) -> Result<Product<T>, AlgebraError> {
        check_len(self.dim(), other.dim())?;
        let op = Self::ops();
        let (a, b) = (&self.values, &other.values);
        let det = |i: usize, j: usize| {
            op.subtract(&op.multiply(&a[i], &b[j]), &op.multiply(&a[j], &b[i]))
        };

        if self.dim() == 2 {
            return Ok(Product::Scalar(det(0, 1)));
        }

        let mut values = vec![det(1, 2), det(2, 0), det(0, 1)];
        values.resize(self.dim(), op.zero());
        Ok(Product::Vector(Self { values }))
    }

    /// Scalar triple product `self · (b × c)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidDimensions`] for 2D vectors and
    /// [`AlgebraError::DimensionMismatch`] if the dimensions differ.
    pub fn triple(&self, b: &Vector<T>, c: &Vector<T>) -> Result<T, AlgebraError> {
        if self.dim() < 3 {
            return Err(AlgebraError::InvalidDimensions { dim: self.dim() });
        }
        check_len(self.dim(), b.dim())?;
        let bc = b.cross(c)?;
        match bc {
            Product::Vector(v) => self.dot(&v)?.into_scalar().ok_or(
                AlgebraError::DimensionMismatch {
                    expected: self.dim(),
                    actual: v.dim(),
                },
            ),
            _ => Err(AlgebraError::InvalidDimensions { dim: b.dim() }),
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> T {
        let op = Self::ops();
        let sqr = self
            .values
            .iter()
            .fold(op.zero(), |acc, v| op.add(&acc, &op.multiply(v, v)));
        op.sqrt(&sqr)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Vector<T>) -> Result<T, AlgebraError> {
        Ok(other.sub(self)?.length())
    }

    /// Scale the vector to unit length in place.
    ///
    /// A vector whose length is exactly zero has no direction: every component
    /// becomes the operation set's undefined value (NaN for floats). Short but
    /// non-zero vectors are still divided by their length.
    pub fn normalize(&mut self) {
        let op = Self::ops();
        let l = self.length();
        if op.is_equal(&l, &op.zero()) {
            log::debug!("normalizing a zero-length vector");
            self.values.fill(op.undefined());
            return;
        }
        for v in self.values.iter_mut() {
            *v = op.divide(v, &l);
        }
    }

    /// Unit vector with the direction of `self`.
    pub fn unit_vector(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    /// The 2D perpendicular `(-y, x)`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidDimensions`] unless the vector is 2D.
    pub fn orthogonal(&self) -> Result<Self, AlgebraError> {
        if self.dim() != 2 {
            return Err(AlgebraError::InvalidDimensions { dim: self.dim() });
        }
        let op = Self::ops();
        Ok(Self::vec2(op.negate(self.y()), self.x().clone()))
    }

    /// Copy of the vector with `dim` components, truncated or extended with zeros.
    pub fn resize(&self, dim: usize) -> Result<Self, AlgebraError> {
        check_dim(dim)?;
        let mut values = self.values.clone();
        values.resize(dim, Self::ops().zero());
        Ok(Self { values })
    }

    /// Read components by name in pattern order, e.g. `"zyx"` or `"rrgg"`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::InvalidSwizzlePattern`] for an unknown letter or
    /// one naming a component beyond the vector's dimension.
    ///
    /// # Example
    ///
    /// ```
    /// use linmat_algebra::Vector;
    ///
    /// let v = Vector::vec3(1.0, 2.0, 3.0);
    /// assert_eq!(v.swizzle("zxx").unwrap(), vec![3.0, 1.0, 1.0]);
    /// assert!(v.swizzle("w").is_err());
    /// ```
    pub fn swizzle(&self, pattern: &str) -> Result<Vec<T>, AlgebraError> {
        pattern
            .chars()
            .map(|letter| {
                alias_index(letter)
                    .and_then(|i| self.values.get(i))
                    .cloned()
                    .ok_or_else(|| AlgebraError::InvalidSwizzlePattern {
                        pattern: pattern.to_string(),
                        letter,
                    })
            })
            .collect()
    }

    /// [`Vector::swizzle`] into a new vector; the pattern must have 2 to 4 letters.
    pub fn swizzled(&self, pattern: &str) -> Result<Self, AlgebraError> {
        Self::from_vec(self.swizzle(pattern)?)
    }

    /// Reorder the leading components in place, e.g. `"yx"` swaps x and y of a 3D vector.
    ///
    /// Components past the pattern length keep their values.
    pub fn swap(&mut self, pattern: &str) -> Result<(), AlgebraError> {
        let swizzled = self.swizzle(pattern)?;
        if swizzled.len() > self.dim() {
            return Err(AlgebraError::DimensionMismatch {
                expected: self.dim(),
                actual: swizzled.len(),
            });
        }
        for (dst, v) in self.values.iter_mut().zip(swizzled) {
            *dst = v;
        }
        Ok(())
    }

    /// Clamp every component to `[min, max]`.
    pub fn clamp(&self, min: &T, max: &T) -> Self {
        Self {
            values: interpolation::clamp_each(&self.values, min, max, &Self::ops()),
        }
    }

    /// Linear interpolation towards `other` with a shared or per-component weight.
    ///
    /// # Errors
    ///
    /// Returns a length mismatch if `other` or a per-component weight does not
    /// match the vector's dimension.
    pub fn mix<'w, V: AsRef<[T]> + ?Sized>(
        &self,
        other: &V,
        t: impl Into<Weight<'w, T>>,
    ) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        let values = interpolation::mix_each(&self.values, other.as_ref(), t.into(), &Self::ops())?;
        Ok(Self { values })
    }

    /// `1` for every component at or past `edge`, `0` otherwise.
    pub fn step<'w>(&self, edge: impl Into<Weight<'w, T>>) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        let values = interpolation::step_each(edge.into(), &self.values, &Self::ops())?;
        Ok(Self { values })
    }

    /// Hermite interpolation of every component between `edge0` and `edge1`.
    pub fn smoothstep<'w>(
        &self,
        edge0: impl Into<Weight<'w, T>>,
        edge1: impl Into<Weight<'w, T>>,
    ) -> Result<Self, AlgebraError>
    where
        T: 'w,
    {
        let values =
            interpolation::smoothstep_each(edge0.into(), edge1.into(), &self.values, &Self::ops())?;
        Ok(Self { values })
    }

    /// Overwrite all components.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::DimensionMismatch`] unless `values` has exactly `dim` entries.
    pub fn copy_from(&mut self, values: &[T]) -> Result<(), AlgebraError> {
        check_len(self.dim(), values.len())?;
        self.values.clone_from_slice(values);
        Ok(())
    }
}

impl<T: Scalar + Float> Vector<T> {
    /// Angle in radians.
    ///
    /// For 2D vectors this is the angle to the x axis. Otherwise it is the
    /// angle between the first three components and the given axis (`0`, `1`
    /// or `2`); other axes give `None`.
    pub fn angle(&self, axis: usize) -> Option<T> {
        if self.dim() == 2 {
            return Some(self.values[1].atan2(self.values[0]));
        }
        if axis > 2 {
            return None;
        }
        let sqr = self.values[..3]
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != axis)
            .fold(T::zero(), |acc, (_, v)| acc + *v * *v);
        Some(sqr.sqrt().atan2(self.values[axis]))
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.values[i]
    }
}

impl<T: Scalar> TryFrom<Vec<T>> for Vector<T> {
    type Error = AlgebraError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.values
    }
}

#[cfg(feature = "approx")]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Vector<T>
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
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

#[cfg(feature = "approx")]
impl<T: approx::RelativeEq> approx::RelativeEq for Vector<T>
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
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}
