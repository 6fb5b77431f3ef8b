use crate::{matrix::Matrix, vector::Vector};

/// The right-hand side of a product: a vector, a matrix or a plain sequence.
///
/// Conversions exist from references to each of them, so products accept any
/// of `&vector`, `&matrix`, `&[f64]` or `&Vec<f64>`.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    /// A dimension-checked vector.
    Vector(&'a Vector<T>),
    /// A matrix.
    Matrix(&'a Matrix<T>),
    /// A raw sequence of components.
    Raw(&'a [T]),
}

impl<'a, T> From<&'a Vector<T>> for Operand<'a, T> {
    fn from(v: &'a Vector<T>) -> Self {
        Operand::Vector(v)
    }
}

impl<'a, T> From<&'a Matrix<T>> for Operand<'a, T> {
    fn from(m: &'a Matrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Operand::Raw(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Operand<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Operand::Raw(values.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Operand<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Operand::Raw(values.as_slice())
    }
}

/// The result of a product, shaped by the kinds of its operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Product<T> {
    /// vector · vector, or the signed area of a 2D cross product.
    Scalar(T),
    /// matrix · vector, vector · matrix, or a 3D cross product.
    Vector(Vector<T>),
    /// matrix · matrix.
    Matrix(Matrix<T>),
    /// matrix · raw sequence.
    Raw(Vec<T>),
}

impl<T> Product<T> {
    /// The scalar result, if this is one.
    pub fn into_scalar(self) -> Option<T> {
        match self {
            Product::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// The vector result, if this is one.
    pub fn into_vector(self) -> Option<Vector<T>> {
        match self {
            Product::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// The matrix result, if this is one.
    pub fn into_matrix(self) -> Option<Matrix<T>> {
        match self {
            Product::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// The raw sequence result, if this is one.
    pub fn into_raw(self) -> Option<Vec<T>> {
        match self {
            Product::Raw(values) => Some(values),
            _ => None,
        }
    }
}
