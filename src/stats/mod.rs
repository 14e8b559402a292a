//! Probability distributions: density, distribution function, quantile and
//! random draws, over scalars and containers.
//!
//! Every family is a small `Copy` parameter struct implementing [`Family`],
//! which supplies the formulas. The engine around them is [`Distribution`],
//! implemented for every family: it validates parameters, handles the edges
//! of the support, and lifts scalar evaluation over containers. Invalid
//! parameters never panic or error; every function kind returns NaN.
//!
//! Each family also has a module of free functions (`stats::normal`,
//! `stats::gamma`, …) that accept any mix of numeric argument types and
//! resolve them to a common float type first (see [`promote`](crate::promote)).
//! The result type is only known once every argument type is, so a bare
//! literal such as `0.5` leaves it open. Suffix literals (`0.5_f64`, `2_i32`)
//! or annotate the binding when calling a method on the result.
//!
//! # Continuous distributions
//!
//! | Distribution | Module | Parameters | Support |
//! |---|---|---|---|
//! | [`Normal`] | [`normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`LogNormal`] | [`lognormal`] | log-mean μ, log-sd σ | [0, ∞) |
//! | [`Exponential`] | [`exponential`] | rate λ | [0, ∞) |
//! | [`Weibull`] | [`weibull`] | shape k, scale λ | [0, ∞) |
//! | [`Gamma`] | [`gamma`] | shape k, scale θ | [0, ∞) |
//! | [`InverseGamma`] | [`inverse_gamma`] | shape α, rate β | [0, ∞) |
//! | [`Beta`] | [`beta`] | shape α, shape β | [0, 1] |
//! | [`ChiSquared`] | [`chi_squared`] | degrees of freedom k | [0, ∞) |
//! | [`StudentT`] | [`student_t`] | degrees of freedom ν | (−∞, ∞) |
//! | [`Cauchy`] | [`cauchy`] | location μ, scale σ | (−∞, ∞) |
//! | [`Laplace`] | [`laplace`] | location μ, scale b | (−∞, ∞) |
//! | [`Logistic`] | [`logistic`] | location μ, scale s | (−∞, ∞) |
//! | [`Uniform`] | [`uniform`] | lower a, upper b | [a, b] |
//!
//! # Discrete distributions
//!
//! | Distribution | Module | Parameters | Support |
//! |---|---|---|---|
//! | [`Bernoulli`] | [`bernoulli`] | probability p | {0, 1} |
//! | [`Binomial`] | [`binomial`] | trials n, probability p | {0, …, n} |
//! | [`Poisson`] | [`poisson`] | rate λ | {0, 1, 2, …} |
//!
//! # Example
//!
//! ```
//! use statis::stats::{normal, Distribution, Normal};
//!
//! let n = Normal::new(1.0_f64, 2.0);
//! assert!((n.distribution(2.0, false) - 0.6914625).abs() < 1e-7);
//!
//! // Same thing through the free function, with mixed argument types.
//! let p = normal::distribution(2_i32, 1.0_f32, 2_u8, false);
//! assert!((p - 0.6914625).abs() < 1e-7);
//!
//! // Invalid parameters give NaN rather than an error.
//! assert!(normal::density(0.0_f64, 0.0_f64, -1.0_f64, false).is_nan());
//! ```

#[macro_use]
mod api;

pub mod bernoulli;
pub mod beta;
pub mod binomial;
pub mod cauchy;
pub mod chi_squared;
pub mod exponential;
pub mod gamma;
pub mod inverse_gamma;
pub mod laplace;
pub mod logistic;
pub mod lognormal;
pub mod normal;
pub mod poisson;
pub mod student_t;
pub mod uniform;
pub mod weibull;

mod logspace;
mod root;

#[cfg(test)]
mod tests;

pub use bernoulli::Bernoulli;
pub use beta::Beta;
pub use binomial::Binomial;
pub use cauchy::Cauchy;
pub use chi_squared::ChiSquared;
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use inverse_gamma::InverseGamma;
pub use laplace::Laplace;
pub use logistic::Logistic;
pub use lognormal::LogNormal;
pub use normal::Normal;
pub use poisson::Poisson;
pub use student_t::StudentT;
pub use uniform::Uniform;
pub use weibull::Weibull;

pub use logspace::{exp_if, log_if};
pub use root::QuantileSettings;

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::container::Container;
use crate::random::UniformSource;
use crate::traits::FloatScalar;
use crate::vectorize;
#[cfg(feature = "alloc")]
use crate::DynMatrix;

/// Errors from strict distribution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    InvalidParameter,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// The formulas of one distribution family.
///
/// The `eval_*` methods are only called by [`Distribution`] after it has
/// checked the parameters and the input against the support, so they may
/// assume valid parameters and an in-range argument.
pub trait Family<T: FloatScalar>: Copy + Send + Sync {
    /// Whether the support is the set of integers within [`support`](Self::support).
    const DISCRETE: bool = false;

    /// Parameter validity predicate. Pure and total.
    fn params_valid(&self) -> bool;

    /// Infimum and supremum of the support, possibly infinite.
    fn support(&self) -> (T, T);

    /// Density (or mass) at `x` within the support.
    fn eval_density(&self, x: T, log_form: bool) -> T;

    /// Distribution function at `x`, where `lo ≤ x < hi` (strictly above `lo`
    /// for continuous families, an integer for discrete ones).
    fn eval_distribution(&self, x: T, log_form: bool) -> T;

    /// Quantile at `p` strictly inside (0, 1).
    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T;

    /// One random variate. Inversion of a single uniform by default.
    fn eval_random<R: UniformSource<T> + ?Sized>(&self, src: &mut R) -> T {
        self.eval_quantile(src.next_uniform(), &QuantileSettings::default())
    }

    /// Expected value; NaN where it does not exist.
    fn eval_mean(&self) -> T;

    /// Variance; NaN or ∞ where it does not exist.
    fn eval_variance(&self) -> T;
}

/// Uniform evaluation contract shared by every [`Family`].
///
/// ```
/// use statis::stats::{Distribution, Weibull};
///
/// let w = Weibull::new(2.0_f64, 3.0);
/// let d = w.density(1.8, false);
/// assert!((w.density(1.8, true) - d.ln()).abs() < 1e-14);
/// assert!(Weibull::new(2.0_f64, 0.0).density(1.8, false).is_nan());
/// ```
pub trait Distribution<T: FloatScalar>: Family<T> {
    /// Whether the parameters are in their valid domain.
    #[inline]
    fn is_valid(&self) -> bool {
        self.params_valid()
    }

    /// Return `self` if the parameters are valid.
    fn validated(self) -> Result<Self, StatsError> {
        if self.params_valid() {
            Ok(self)
        } else {
            Err(StatsError::InvalidParameter)
        }
    }

    /// Density (mass for discrete families) at `x`, or its log.
    ///
    /// Zero (−∞ in log form) outside the support and, for discrete families,
    /// at non-integers. NaN for invalid parameters or NaN `x`.
    fn density(&self, x: T, log_form: bool) -> T {
        if !self.params_valid() || x.is_nan() {
            return T::nan();
        }
        let (lo, hi) = self.support();
        if x < lo || x > hi || x.is_infinite() || (Self::DISCRETE && x != x.floor()) {
            return log_if(T::zero(), log_form);
        }
        self.eval_density(x, log_form)
    }

    /// Distribution function P(X ≤ x), or its log.
    ///
    /// NaN for invalid parameters or NaN `x`.
    fn distribution(&self, x: T, log_form: bool) -> T {
        if !self.params_valid() || x.is_nan() {
            return T::nan();
        }
        let (lo, hi) = self.support();
        if x < lo || (!Self::DISCRETE && x <= lo) {
            return log_if(T::zero(), log_form);
        }
        if x >= hi {
            return log_if(T::one(), log_form);
        }
        let x = if Self::DISCRETE { x.floor() } else { x };
        self.eval_distribution(x, log_form)
    }

    /// Quantile (inverse distribution function) at `p`.
    ///
    /// `p = 0` and `p = 1` give the ends of the support. NaN for invalid
    /// parameters or `p` outside [0, 1].
    #[inline]
    fn quantile(&self, p: T) -> T {
        self.quantile_with(p, &QuantileSettings::default())
    }

    /// [`quantile`](Self::quantile) with explicit root-finding settings.
    fn quantile_with(&self, p: T, settings: &QuantileSettings<T>) -> T {
        if !self.params_valid() || p.is_nan() || p < T::zero() || p > T::one() {
            return T::nan();
        }
        let (lo, hi) = self.support();
        if p == T::zero() {
            return lo;
        }
        if p == T::one() {
            return hi;
        }
        self.eval_quantile(p, settings)
    }

    /// One random variate drawn with `src`.
    ///
    /// NaN for invalid parameters, in which case `src` is not advanced.
    fn random<R: UniformSource<T> + ?Sized>(&self, src: &mut R) -> T {
        if !self.params_valid() {
            return T::nan();
        }
        self.eval_random(src)
    }

    /// `count` variates drawn in order.
    #[cfg(feature = "alloc")]
    fn random_n<R: UniformSource<T> + ?Sized>(&self, count: usize, src: &mut R) -> Vec<T> {
        if !self.params_valid() {
            return vec![T::nan(); count];
        }
        (0..count).map(|_| self.eval_random(src)).collect()
    }

    /// An `nrows x ncols` matrix of variates, drawn in column-major order.
    #[cfg(feature = "alloc")]
    fn random_matrix<R: UniformSource<T> + ?Sized>(
        &self,
        nrows: usize,
        ncols: usize,
        src: &mut R,
    ) -> DynMatrix<T> {
        DynMatrix::from_vec(nrows, ncols, self.random_n(nrows * ncols, src))
    }

    /// Expected value E\[X\].
    fn mean(&self) -> T {
        if self.params_valid() {
            self.eval_mean()
        } else {
            T::nan()
        }
    }

    /// Variance Var(X).
    fn variance(&self) -> T {
        if self.params_valid() {
            self.eval_variance()
        } else {
            T::nan()
        }
    }

    /// Density at `x`.
    #[inline]
    fn pdf(&self, x: T) -> T {
        self.density(x, false)
    }

    /// Log density at `x`.
    #[inline]
    fn ln_pdf(&self, x: T) -> T {
        self.density(x, true)
    }

    /// Distribution function at `x`.
    #[inline]
    fn cdf(&self, x: T) -> T {
        self.distribution(x, false)
    }

    /// [`density`](Self::density) at every element of `x`.
    fn density_each<C: Container + ?Sized>(&self, x: &C, log_form: bool) -> C::Output<T> {
        vectorize::apply::<C, T, _>(x, |v| self.density(v, log_form))
    }

    /// [`distribution`](Self::distribution) at every element of `x`.
    fn distribution_each<C: Container + ?Sized>(&self, x: &C, log_form: bool) -> C::Output<T> {
        vectorize::apply::<C, T, _>(x, |v| self.distribution(v, log_form))
    }

    /// [`quantile`](Self::quantile) at every element of `p`.
    fn quantile_each<C: Container + ?Sized>(&self, p: &C) -> C::Output<T> {
        vectorize::apply::<C, T, _>(p, |v| self.quantile(v))
    }
}

impl<T: FloatScalar, F: Family<T>> Distribution<T> for F {}
