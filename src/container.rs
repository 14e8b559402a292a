//! Container capabilities used by the elementwise vectorizer.
//!
//! A container only has to say how many elements it holds and in what shape,
//! read an element by linear index, and allocate a result of the same shape
//! with a different element type. Everything else (broadcasting, validation,
//! parallelism) lives in [`vectorize`](crate::vectorize) and is written once.
//!
//! | Container | Shape | Result type |
//! |---|---|---|
//! | `[E; N]` | `Seq(N)` | `[U; N]` |
//! | `Matrix<E, M, N>` | `Mat { M, N }` | `Matrix<U, M, N>` |
//! | `Vec<E>`, `[E]` | `Seq(len)` | `Vec<U>` (alloc) |
//! | `DynVector<E>` | `Seq(len)` | `DynVector<U>` (alloc) |
//! | `DynMatrix<E>` | `Mat { nrows, ncols }` | `DynMatrix<U>` (alloc) |
//!
//! Matrices are read in column-major linear order.

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::matrix::Matrix;
use crate::promote::Numeric;
use crate::traits::FloatScalar;
#[cfg(feature = "alloc")]
use crate::{DynMatrix, DynVector};

/// Logical shape of a container.
///
/// Rank-1 and rank-2 shapes never compare equal, even when they hold the same
/// number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A sequence of the given length.
    Seq(usize),
    /// A matrix with the given dimensions.
    Mat { nrows: usize, ncols: usize },
}

impl Shape {
    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match *self {
            Shape::Seq(n) => n,
            Shape::Mat { nrows, ncols } => nrows * ncols,
        }
    }

    /// Whether the shape holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Shape::Seq(n) => write!(f, "[{n}]"),
            Shape::Mat { nrows, ncols } => write!(f, "{nrows}x{ncols}"),
        }
    }
}

/// A container argument does not have the shape of the input container.
///
/// Raised before any element is evaluated or any output allocated.
///
/// ```
/// use statis::stats::normal;
///
/// let x = vec![0.0_f64, 1.0, 2.0];
/// let sigma = vec![1.0_f64, 2.0];
/// let err = normal::density_each(&x, 0.0_f64, &sigma, false).unwrap_err();
/// assert_eq!(err.to_string(), "shape mismatch: expected [3], got [2]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Shape of the input container.
    pub expected: Shape,
    /// Shape of the offending parameter container.
    pub got: Shape,
}

impl core::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "shape mismatch: expected {}, got {}", self.expected, self.got)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeMismatch {}

/// Read access to a numeric container of any supported layout.
///
/// Implementors are borrowed read-only for the duration of an evaluation.
pub trait Container: Sync {
    /// Element type.
    type Elem: Numeric;

    /// Result container of the same shape holding `U`.
    type Output<U: FloatScalar>: ContainerMut<U>;

    /// Logical shape.
    fn shape(&self) -> Shape;

    /// Number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.shape().len()
    }

    /// Whether the container is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at linear index `i`. Panics if `i >= self.len()`.
    fn read(&self, i: usize) -> Self::Elem;

    /// Allocate a result of the same shape. Contents are unspecified until
    /// written.
    fn alloc_like<U: FloatScalar>(&self) -> Self::Output<U>;
}

/// Write access to a freshly allocated result container.
pub trait ContainerMut<U> {
    /// The elements in linear order.
    fn as_mut_slice(&mut self) -> &mut [U];

    /// Store `value` at linear index `i`.
    #[inline]
    fn write(&mut self, i: usize, value: U) {
        self.as_mut_slice()[i] = value;
    }
}

// ── Fixed-size backends ─────────────────────────────────────────────

impl<E: Numeric, const N: usize> Container for [E; N] {
    type Elem = E;
    type Output<U: FloatScalar> = [U; N];

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Seq(N)
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> [U; N] {
        [U::zero(); N]
    }
}

impl<U, const N: usize> ContainerMut<U> for [U; N] {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [U] {
        self
    }
}

impl<E: Numeric, const M: usize, const N: usize> Container for Matrix<E, M, N> {
    type Elem = E;
    type Output<U: FloatScalar> = Matrix<U, M, N>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Mat { nrows: M, ncols: N }
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self.as_slice()[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> Matrix<U, M, N> {
        Matrix::fill(U::zero())
    }
}

impl<U, const M: usize, const N: usize> ContainerMut<U> for Matrix<U, M, N> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [U] {
        Matrix::as_mut_slice(self)
    }
}

// ── Heap backends ───────────────────────────────────────────────────

#[cfg(feature = "alloc")]
impl<E: Numeric> Container for [E] {
    type Elem = E;
    type Output<U: FloatScalar> = Vec<U>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Seq(<[E]>::len(self))
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> Vec<U> {
        vec![U::zero(); <[E]>::len(self)]
    }
}

#[cfg(feature = "alloc")]
impl<E: Numeric> Container for Vec<E> {
    type Elem = E;
    type Output<U: FloatScalar> = Vec<U>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Seq(Vec::len(self))
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> Vec<U> {
        vec![U::zero(); Vec::len(self)]
    }
}

#[cfg(feature = "alloc")]
impl<U> ContainerMut<U> for Vec<U> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [U] {
        self
    }
}

#[cfg(feature = "alloc")]
impl<E: Numeric> Container for DynVector<E> {
    type Elem = E;
    type Output<U: FloatScalar> = DynVector<U>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Seq(DynVector::len(self))
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> DynVector<U> {
        DynVector::fill(DynVector::len(self), U::zero())
    }
}

#[cfg(feature = "alloc")]
impl<U> ContainerMut<U> for DynVector<U> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [U] {
        DynVector::as_mut_slice(self)
    }
}

#[cfg(feature = "alloc")]
impl<E: Numeric> Container for DynMatrix<E> {
    type Elem = E;
    type Output<U: FloatScalar> = DynMatrix<U>;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::Mat {
            nrows: self.nrows(),
            ncols: self.ncols(),
        }
    }

    #[inline]
    fn read(&self, i: usize) -> E {
        self.as_slice()[i]
    }

    #[inline]
    fn alloc_like<U: FloatScalar>(&self) -> DynMatrix<U> {
        DynMatrix::fill(self.nrows(), self.ncols(), U::zero())
    }
}

#[cfg(feature = "alloc")]
impl<U> ContainerMut<U> for DynMatrix<U> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [U] {
        DynMatrix::as_mut_slice(self)
    }
}
