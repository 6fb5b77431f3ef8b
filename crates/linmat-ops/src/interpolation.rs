use crate::{error::OpsError, operations::Operations};

/// Clamp `v` to `[min, max]`.
pub fn clamp<O: Operations>(v: &O::Scalar, min: &O::Scalar, max: &O::Scalar, ops: &O) -> O::Scalar {
    if ops.is_less_than(v, min) {
        return min.clone();
    }
    if ops.is_less_than(max, v) {
        return max.clone();
    }
    v.clone()
}

/// Linear interpolation `a * (1 - t) + b * t`, with `t` clamped to `[0, 1]` first.
///
/// # Example
///
/// ```
/// use linmat_ops::{interpolation::mix, NumberOps};
///
/// let op = NumberOps::default();
/// assert_eq!(mix(&2.0, &4.0, &0.5, &op), 3.0);
/// assert_eq!(mix(&2.0, &4.0, &7.0, &op), 4.0);
/// ```
pub fn mix<O: Operations>(a: &O::Scalar, b: &O::Scalar, t: &O::Scalar, ops: &O) -> O::Scalar {
    let m = clamp(t, &ops.zero(), &ops.one(), ops);
    ops.add(
        &ops.multiply(a, &ops.subtract(&ops.one(), &m)),
        &ops.multiply(b, &m),
    )
}

/// `1` if `edge <= x`, `0` otherwise.
pub fn step<O: Operations>(edge: &O::Scalar, x: &O::Scalar, ops: &O) -> O::Scalar {
    if ops.is_less_than(edge, x) || ops.is_equal(edge, x) {
        ops.one()
    } else {
        ops.zero()
    }
}

/// Hermite interpolation between `edge0` and `edge1`: `t * t * (3 - 2 * t)`.
///
/// An empty range (`edge0 == edge1` within the operation tolerance) degrades
/// to [`step`] at `edge0`.
pub fn smoothstep<O: Operations>(
    edge0: &O::Scalar,
    edge1: &O::Scalar,
    x: &O::Scalar,
    ops: &O,
) -> O::Scalar {
    let range = ops.subtract(edge1, edge0);
    if ops.is_zero(&range) {
        return step(edge0, x, ops);
    }
    let t = clamp(
        &ops.divide(&ops.subtract(x, edge0), &range),
        &ops.zero(),
        &ops.one(),
        ops,
    );
    let three_minus_2t = ops.subtract(&ops.identity(3), &ops.multiply(&ops.identity(2), &t));
    ops.multiply(&ops.multiply(&t, &t), &three_minus_2t)
}

/// A per-call interpolation parameter: one value for every component, or one value per component.
#[derive(Debug, Clone, Copy)]
pub enum Weight<'a, T> {
    /// The same value is used for every component.
    Broadcast(&'a T),
    /// Component `i` uses value `i`.
    PerComponent(&'a [T]),
}

impl<'a, T> Weight<'a, T> {
    fn check_len(&self, len: usize) -> Result<(), OpsError> {
        match self {
            Weight::PerComponent(values) if values.len() != len => Err(OpsError::LengthMismatch {
                expected: len,
                actual: values.len(),
            }),
            _ => Ok(()),
        }
    }

    fn at(&self, i: usize) -> &'a T {
        match *self {
            Weight::Broadcast(v) => v,
            Weight::PerComponent(values) => &values[i],
        }
    }
}

impl<'a, T> From<&'a T> for Weight<'a, T> {
    fn from(value: &'a T) -> Self {
        Weight::Broadcast(value)
    }
}

impl<'a, T> From<&'a [T]> for Weight<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Weight::PerComponent(values)
    }
}

/// Clamp every component of `values`.
pub fn clamp_each<O: Operations>(
    values: &[O::Scalar],
    min: &O::Scalar,
    max: &O::Scalar,
    ops: &O,
) -> Vec<O::Scalar> {
    values.iter().map(|v| clamp(v, min, max, ops)).collect()
}

/// Component-wise [`mix`] of two sequences.
///
/// # Errors
///
/// Returns [`OpsError::LengthMismatch`] if `a` and `b` differ in length or a
/// per-component `t` does not match their length.
pub fn mix_each<O: Operations>(
    a: &[O::Scalar],
    b: &[O::Scalar],
    t: Weight<'_, O::Scalar>,
    ops: &O,
) -> Result<Vec<O::Scalar>, OpsError> {
    if a.len() != b.len() {
        return Err(OpsError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    t.check_len(a.len())?;

    Ok(a
        .iter()
        .zip(b.iter())
        .enumerate()
        .map(|(i, (x, y))| mix(x, y, t.at(i), ops))
        .collect())
}

/// Component-wise [`step`].
pub fn step_each<O: Operations>(
    edge: Weight<'_, O::Scalar>,
    x: &[O::Scalar],
    ops: &O,
) -> Result<Vec<O::Scalar>, OpsError> {
    edge.check_len(x.len())?;
    Ok(x
        .iter()
        .enumerate()
        .map(|(i, v)| step(edge.at(i), v, ops))
        .collect())
}

/// Component-wise [`smoothstep`].
pub fn smoothstep_each<O: Operations>(
    edge0: Weight<'_, O::Scalar>,
    edge1: Weight<'_, O::Scalar>,
    x: &[O::Scalar],
    ops: &O,
) -> Result<Vec<O::Scalar>, OpsError> {
    edge0.check_len(x.len())?;
    edge1.check_len(x.len())?;
    Ok(x
        .iter()
        .enumerate()
        .map(|(i, v)| smoothstep(edge0.at(i), edge1.at(i), v, ops))
        .collect())
}
