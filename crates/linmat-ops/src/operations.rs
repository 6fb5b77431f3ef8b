use std::fmt::Debug;

use num_traits::Float;

/// Tolerance used by [`NumberOps::default`] to decide whether a value is zero.
pub const DEFAULT_EPSILON: f64 = 1e-7;

/// The algebraic interface every generic algorithm in linmat is written against.
///
/// An implementation is a *value*: it may carry state such as the zero
/// tolerance, and algorithms receive it by reference. Swapping the operation
/// set (rational, interval or any other scalar representation) never requires
/// touching the algorithms.
///
/// Implementations must stay internally consistent:
/// - algorithms only call [`Operations::divide`] with a divisor for which
///   [`Operations::is_zero`] is false;
/// - [`Operations::identity`]`(n)` must behave as the integer `n` embedded in
///   the scalar field under `add` and `multiply`.
pub trait Operations {
    /// The scalar type the operations act on.
    type Scalar: Clone + Debug;

    /// The additive identity.
    fn zero(&self) -> Self::Scalar;

    /// The integer `n` embedded in the scalar field. `identity(1)` is the unit value.
    fn identity(&self, n: i32) -> Self::Scalar;

    /// The value produced by operations with no defined result (NaN for floats).
    fn undefined(&self) -> Self::Scalar;

    /// `a + b`
    fn add(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `a - b`
    fn subtract(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `a * b`
    fn multiply(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `a / b`
    fn divide(&self, a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// `-v`
    fn negate(&self, v: &Self::Scalar) -> Self::Scalar;

    /// Square root, used by Euclidean norms.
    fn sqrt(&self, v: &Self::Scalar) -> Self::Scalar;

    /// Whether `v` is zero within the tolerance held by this operation set.
    fn is_zero(&self, v: &Self::Scalar) -> bool;

    /// Whether `a` and `b` are equal.
    fn is_equal(&self, a: &Self::Scalar, b: &Self::Scalar) -> bool;

    /// Whether `a < b`.
    fn is_less_than(&self, a: &Self::Scalar, b: &Self::Scalar) -> bool;

    /// Whether `v` is a usable value (finite for floats).
    fn is_defined(&self, v: &Self::Scalar) -> bool;

    /// The unit value, `identity(1)`.
    fn one(&self) -> Self::Scalar {
        self.identity(1)
    }

    /// Sum of `values`, or `None` if any value is not defined.
    fn sum(&self, values: &[Self::Scalar]) -> Option<Self::Scalar> {
        values.iter().try_fold(self.zero(), |acc, v| {
            self.is_defined(v).then(|| self.add(&acc, v))
        })
    }

    /// Product of `values`, or `None` if any value before the first zero is not defined.
    ///
    /// Stops at the first zero factor.
    fn product(&self, values: &[Self::Scalar]) -> Option<Self::Scalar> {
        let mut p = self.one();
        for v in values {
            if !self.is_defined(v) {
                return None;
            }
            if self.is_zero(v) {
                return Some(self.zero());
            }
            p = self.multiply(&p, v);
        }
        Some(p)
    }
}

/// The default operation set for floating point scalars.
///
/// `is_zero` compares against `epsilon` rather than testing exact equality so
/// that rounding noise accumulated during elimination is absorbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberOps<T> {
    /// Values with an absolute value below `epsilon` are treated as zero.
    pub epsilon: T,
}

impl<T: Float> NumberOps<T> {
    /// Create an operation set with a custom zero tolerance.
    pub fn with_epsilon(epsilon: T) -> Self {
        Self { epsilon }
    }
}

impl<T: Float> Default for NumberOps<T> {
    fn default() -> Self {
        Self {
            epsilon: T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T: Float + Debug> Operations for NumberOps<T> {
    type Scalar = T;

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }

    #[inline]
    fn identity(&self, n: i32) -> T {
        T::from(n).unwrap_or_else(T::nan)
    }

    #[inline]
    fn undefined(&self) -> T {
        T::nan()
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    #[inline]
    fn subtract(&self, a: &T, b: &T) -> T {
        *a - *b
    }

    #[inline]
    fn multiply(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    #[inline]
    fn divide(&self, a: &T, b: &T) -> T {
        *a / *b
    }

    #[inline]
    fn negate(&self, v: &T) -> T {
        -*v
    }

    #[inline]
    fn sqrt(&self, v: &T) -> T {
        v.sqrt()
    }

    #[inline]
    fn is_zero(&self, v: &T) -> bool {
        v.abs() < self.epsilon
    }

    #[inline]
    fn is_equal(&self, a: &T, b: &T) -> bool {
        a == b
    }

    #[inline]
    fn is_less_than(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn is_defined(&self, v: &T) -> bool {
        v.is_finite()
    }
}

/// Binds a scalar type to the operation set used when none is given explicitly.
pub trait Scalar: Clone + Debug + PartialEq + Default {
    /// The default operation set for this scalar.
    type Ops: Operations<Scalar = Self> + Default;
}

impl Scalar for f32 {
    type Ops = NumberOps<f32>;
}

impl Scalar for f64 {
    type Ops = NumberOps<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_ops_basics() {
        let op = NumberOps::<f64>::default();
        assert_eq!(op.zero(), 0.0);
        assert_eq!(op.one(), 1.0);
        assert_eq!(op.identity(3), 3.0);
        assert_eq!(op.add(&1.5, &2.0), 3.5);
        assert_eq!(op.subtract(&1.5, &2.0), -0.5);
        assert_eq!(op.multiply(&1.5, &2.0), 3.0);
        assert_eq!(op.divide(&3.0, &2.0), 1.5);
        assert_eq!(op.negate(&2.0), -2.0);
        assert_eq!(op.sqrt(&9.0), 3.0);
        assert!(op.is_less_than(&1.0, &2.0));
        assert!(!op.is_less_than(&2.0, &2.0));
        assert!(op.is_equal(&2.0, &2.0));
        assert!(op.undefined().is_nan());
    }

    #[test]
    fn test_is_zero_uses_tolerance() {
        let op = NumberOps::<f64>::default();
        assert!(op.is_zero(&0.0));
        assert!(op.is_zero(&1e-9));
        assert!(op.is_zero(&-1e-9));
        assert!(!op.is_zero(&1e-3));

        let loose = NumberOps::with_epsilon(1e-2);
        assert!(loose.is_zero(&1e-3));
    }

    #[test]
    fn test_identity_embeds_integers() {
        let op = NumberOps::<f32>::default();
        let three = op.add(&op.one(), &op.identity(2));
        assert_eq!(three, op.identity(3));
        assert_eq!(op.multiply(&op.identity(2), &op.identity(3)), op.identity(6));
    }

    #[test]
    fn test_is_defined() {
        let op = NumberOps::<f64>::default();
        assert!(op.is_defined(&1.0));
        assert!(!op.is_defined(&f64::NAN));
        assert!(!op.is_defined(&f64::INFINITY));
    }

    #[test]
    fn test_sum_and_product() {
        let op = NumberOps::<f64>::default();
        assert_eq!(op.sum(&[1.0, 2.0, 3.0]), Some(6.0));
        assert_eq!(op.sum(&[]), Some(0.0));
        assert_eq!(op.sum(&[1.0, f64::NAN]), None);

        assert_eq!(op.product(&[2.0, 3.0, 4.0]), Some(24.0));
        assert_eq!(op.product(&[]), Some(1.0));
        assert_eq!(op.product(&[2.0, 0.0, f64::NAN]), Some(0.0));
        assert_eq!(op.product(&[f64::INFINITY, 0.0]), None);
    }
}
