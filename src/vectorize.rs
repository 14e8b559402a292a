//! Elementwise lifting of scalar evaluators over containers.
//!
//! [`map`] evaluates `f(x[i], params[i])` for every linear index `i` of the
//! input container and writes the results into a freshly allocated container
//! of the same shape. Each parameter is either a plain number, broadcast to
//! every element, or a borrowed container that must have exactly the input's
//! shape.
//!
//! ```
//! use statis::vectorize::map;
//!
//! let x = [1.0_f64, 2.0, 3.0];
//! let scale = vec![10.0_f64, 20.0, 30.0];
//! let y: [f64; 3] = map(&x, (&scale, 1_i32), |v: f64, (s, o): (f64, f64)| v * s + o).unwrap();
//! assert_eq!(y, [11.0, 41.0, 91.0]);
//! ```
//!
//! With the `rayon` feature the fill runs on rayon's global pool. Elements are
//! independent, so the result is identical to the sequential pass.

use crate::container::{Container, ContainerMut, Shape, ShapeMismatch};
use crate::promote::Numeric;
use crate::traits::FloatScalar;

/// A parameter argument: a broadcast scalar or a borrowed container.
pub trait Broadcast: Sync {
    /// Element type.
    type Elem: Numeric;

    /// `None` for a scalar, otherwise the container's shape.
    fn shape(&self) -> Option<Shape>;

    /// The parameter value at linear index `i`.
    fn value_at(&self, i: usize) -> Self::Elem;
}

macro_rules! impl_broadcast_scalar {
    ($($t:ty),*) => {
        $(
            impl Broadcast for $t {
                type Elem = $t;

                #[inline]
                fn shape(&self) -> Option<Shape> {
                    None
                }

                #[inline]
                fn value_at(&self, _i: usize) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_broadcast_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<C: Container + ?Sized> Broadcast for &C {
    type Elem = C::Elem;

    #[inline]
    fn shape(&self) -> Option<Shape> {
        Some((**self).shape())
    }

    #[inline]
    fn value_at(&self, i: usize) -> C::Elem {
        (**self).read(i)
    }
}

/// A tuple of zero to three [`Broadcast`] parameters, read as values of the
/// working type `T`.
pub trait ParamSet<T: FloatScalar>: Sync {
    /// The per-element parameter values, e.g. `(T, T)` for two parameters.
    type Values: Copy;

    /// Check every container parameter against the input shape.
    fn check(&self, shape: Shape) -> Result<(), ShapeMismatch>;

    /// Parameter values at linear index `i`.
    fn values(&self, i: usize) -> Self::Values;
}

#[inline]
fn check_one<B: Broadcast>(b: &B, expected: Shape) -> Result<(), ShapeMismatch> {
    match b.shape() {
        Some(got) if got != expected => Err(ShapeMismatch { expected, got }),
        _ => Ok(()),
    }
}

impl<T: FloatScalar> ParamSet<T> for () {
    type Values = ();

    #[inline]
    fn check(&self, _shape: Shape) -> Result<(), ShapeMismatch> {
        Ok(())
    }

    #[inline]
    fn values(&self, _i: usize) {}
}

impl<T: FloatScalar, A: Broadcast> ParamSet<T> for (A,) {
    type Values = (T,);

    #[inline]
    fn check(&self, shape: Shape) -> Result<(), ShapeMismatch> {
        check_one(&self.0, shape)
    }

    #[inline]
    fn values(&self, i: usize) -> (T,) {
        (self.0.value_at(i).to_real(),)
    }
}

impl<T: FloatScalar, A: Broadcast, B: Broadcast> ParamSet<T> for (A, B) {
    type Values = (T, T);

    #[inline]
    fn check(&self, shape: Shape) -> Result<(), ShapeMismatch> {
        check_one(&self.0, shape)?;
        check_one(&self.1, shape)
    }

    #[inline]
    fn values(&self, i: usize) -> (T, T) {
        (self.0.value_at(i).to_real(), self.1.value_at(i).to_real())
    }
}

impl<T: FloatScalar, A: Broadcast, B: Broadcast, C: Broadcast> ParamSet<T> for (A, B, C) {
    type Values = (T, T, T);

    #[inline]
    fn check(&self, shape: Shape) -> Result<(), ShapeMismatch> {
        check_one(&self.0, shape)?;
        check_one(&self.1, shape)?;
        check_one(&self.2, shape)
    }

    #[inline]
    fn values(&self, i: usize) -> (T, T, T) {
        (
            self.0.value_at(i).to_real(),
            self.1.value_at(i).to_real(),
            self.2.value_at(i).to_real(),
        )
    }
}

/// Evaluate `f` at every element of `x` with its broadcast parameters.
///
/// Shapes are checked before anything is allocated; on mismatch no element is
/// evaluated.
pub fn map<C, P, T, F>(x: &C, params: P, f: F) -> Result<C::Output<T>, ShapeMismatch>
where
    C: Container + ?Sized,
    T: FloatScalar,
    P: ParamSet<T>,
    F: Fn(T, P::Values) -> T + Sync + Send,
{
    let shape = x.shape();
    if let Err(e) = params.check(shape) {
        tracing::debug!(%e, "rejecting elementwise evaluation");
        return Err(e);
    }
    let mut out = x.alloc_like::<T>();
    fill(&mut out, shape.len(), |i| f(x.read(i).to_real(), params.values(i)));
    Ok(out)
}

/// Evaluate `f` at every element of `x`. Infallible form of [`map`] without
/// parameters.
pub fn apply<C, T, F>(x: &C, f: F) -> C::Output<T>
where
    C: Container + ?Sized,
    T: FloatScalar,
    F: Fn(T) -> T + Sync + Send,
{
    let mut out = x.alloc_like::<T>();
    fill(&mut out, x.len(), |i| f(x.read(i).to_real()));
    out
}

#[cfg(not(feature = "rayon"))]
#[inline]
fn fill<T, O, G>(out: &mut O, n: usize, g: G)
where
    O: ContainerMut<T>,
    G: Fn(usize) -> T,
{
    for i in 0..n {
        out.write(i, g(i));
    }
}

#[cfg(feature = "rayon")]
#[inline]
fn fill<T, O, G>(out: &mut O, n: usize, g: G)
where
    T: Send,
    O: ContainerMut<T>,
    G: Fn(usize) -> T + Sync + Send,
{
    use rayon::prelude::*;

    out.as_mut_slice()[..n]
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = g(i));
}
