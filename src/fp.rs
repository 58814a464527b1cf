//! Relative-epsilon floating point comparisons.
//!
//! Two values are compared against a tolerance of `epsilon * max(|a|, |b|, 1)`, so the
//! tolerance grows with the magnitude of the operands but never drops below `epsilon`
//! itself. The plain functions use the machine epsilon of the scalar type.

use num::Float;

#[inline]
fn scale<T: Float>(a: T, b: T) -> T {
    a.abs().max(b.abs()).max(T::one())
}

/// `a == b` within `epsilon`, relative to the larger operand.
#[inline]
pub fn eq_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    (a - b).abs() < epsilon * scale(a, b)
}
/// `a < b` by more than the relative tolerance.
#[inline]
pub fn lt_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a < b - epsilon * scale(a, b)
}
/// `a <= b` within the relative tolerance.
#[inline]
pub fn le_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a < b + epsilon * scale(a, b)
}
/// `a > b` by more than the relative tolerance.
#[inline]
pub fn gt_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a > b + epsilon * scale(a, b)
}
/// `a >= b` within the relative tolerance.
#[inline]
pub fn ge_eps<T: Float>(a: T, b: T, epsilon: T) -> bool {
    a > b - epsilon * scale(a, b)
}
#[inline]
pub fn is_zero_eps<T: Float>(a: T, epsilon: T) -> bool {
    eq_eps(a, T::zero(), epsilon)
}

#[inline]
pub fn eq<T: Float>(a: T, b: T) -> bool { eq_eps(a, b, T::epsilon()) }
#[inline]
pub fn lt<T: Float>(a: T, b: T) -> bool { lt_eps(a, b, T::epsilon()) }
#[inline]
pub fn le<T: Float>(a: T, b: T) -> bool { le_eps(a, b, T::epsilon()) }
#[inline]
pub fn gt<T: Float>(a: T, b: T) -> bool { gt_eps(a, b, T::epsilon()) }
#[inline]
pub fn ge<T: Float>(a: T, b: T) -> bool { ge_eps(a, b, T::epsilon()) }
#[inline]
pub fn is_zero<T: Float>(a: T) -> bool { is_zero_eps(a, T::epsilon()) }
