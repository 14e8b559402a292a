use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be stored in a matrix or vector.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for the floating-point type a distribution is evaluated in.
///
/// Every density, distribution, quantile and sampling routine is generic over
/// `FloatScalar`; in practice this is `f32` or `f64`. `Send + Sync` lets the
/// vectorizer hand elements to worker threads.
pub trait FloatScalar: Scalar + Float + Send + Sync + 'static {}

impl<T: Scalar + Float + Send + Sync + 'static> FloatScalar for T {}

/// Convert an `f64` literal into `T`.
///
/// Every `FloatScalar` can represent (or round) any finite `f64`, so the
/// conversion does not fail for the types this crate is instantiated with.
#[inline]
pub(crate) fn cst<T: FloatScalar>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
