//! # statis
//!
//! Probability distributions for Rust, no-std compatible: density, distribution
//! function, quantile and random draws for sixteen families, over scalars and
//! over vectors and matrices.
//!
//! ## Quick start
//!
//! ```
//! use statis::stats::{gamma, normal, Distribution, Gamma};
//!
//! // Methods on a parameter struct
//! let g = Gamma::new(2.0_f64, 1.5);
//! let x = g.quantile(0.9);
//! assert!((g.cdf(x) - 0.9).abs() < 1e-12);
//!
//! // Free functions accept any mix of numeric types
//! let p: f64 = normal::distribution(2_i32, 1.0_f32, 2_u8, false);
//! assert!((p - 0.6914625).abs() < 1e-7);
//!
//! // Elementwise over a container, with parameters broadcast or zipped
//! let xs = vec![0.5_f64, 1.0, 2.0];
//! let shapes = vec![1.0_f64, 2.0, -1.0];
//! let d = gamma::density_each(&xs, &shapes, 1.0_f64, false).unwrap();
//! assert!(d[2].is_nan()); // invalid shape only poisons its own element
//! ```
//!
//! ## Modules
//!
//! - [`stats`] — The distribution catalog. Each family is a small `Copy`
//!   parameter struct implementing [`Family`]; the [`Distribution`] trait,
//!   implemented for every family, supplies parameter validation, support
//!   handling, log-form results and container evaluation. Invalid parameters
//!   produce NaN, never a panic. Each family also has a module of free
//!   functions (`stats::normal::density`, …) over heterogeneous argument types.
//!
//! - [`special`] — Gamma, log-gamma, beta, regularized incomplete gamma and
//!   beta, error functions. The numerical kernels behind the catalog.
//!
//! - [`promote`] — Numeric type resolution: maps a tuple of argument types to
//!   the one float type a computation runs in (`f32` only when every argument
//!   is `f32`, otherwise `f64`).
//!
//! - [`vectorize`] / [`container`] — Elementwise evaluation over arrays,
//!   slices, `Vec`, [`Matrix`], [`DynVector`] and [`DynMatrix`], with
//!   shape checking before any work and results in the input's shape.
//!
//! - [`random`] — The [`UniformSource`] trait through which every draw takes
//!   its randomness. Any `rand::RngCore` is a source.
//!
//! - [`matrix`] / [`dynmatrix`] — Column-major fixed-size `Matrix<T, M, N>`
//!   and heap-allocated `DynMatrix<T>` / `DynVector<T>` containers.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all container elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, the types distributions are evaluated in
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std  | `DynMatrix` / `DynVector`, `Vec` containers, `random_n` |
//! | `libm`  | baseline | Pure-Rust software float fallback |
//! | `rayon` | no       | Parallel elementwise evaluation over large containers |
//! | `all`   | no       | All features: `std` + `rayon` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod container;
#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod matrix;
pub mod promote;
pub mod random;
pub mod special;
pub mod stats;
pub mod traits;
pub mod vectorize;

pub use container::{Container, ContainerMut, Shape, ShapeMismatch};
#[cfg(feature = "alloc")]
pub use dynmatrix::{DimensionMismatch, DynMatrix, DynVector};
pub use matrix::Matrix;
pub use promote::{Numeric, Promoted, Resolve};
pub use random::UniformSource;
pub use stats::{Distribution, Family, QuantileSettings, StatsError};
pub use traits::{FloatScalar, Scalar};
