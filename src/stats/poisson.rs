//! Poisson distribution.

use crate::special::{gamma_inc_pair, lgamma};
use crate::traits::FloatScalar;

use super::gamma::lower_from_pair;
use super::root::invert_discrete_cdf;
use super::{exp_if, Family, QuantileSettings};

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k!. Valid for finite λ > 0.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, Poisson};
///
/// let d = Poisson::new(3.0_f64);
/// assert!((d.pdf(0.0) - (-3.0_f64).exp()).abs() < 1e-15);
/// assert_eq!(d.quantile(0.5), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson<T> {
    rate: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Poisson distribution with `rate` λ.
    pub fn new(rate: T) -> Self {
        Self { rate }
    }
}

impl<T: FloatScalar> Family<T> for Poisson<T> {
    const DISCRETE: bool = true;

    fn params_valid(&self) -> bool {
        self.rate.is_finite() && self.rate > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn eval_density(&self, k: T, log_form: bool) -> T {
        exp_if(k * self.rate.ln() - self.rate - lgamma(k + T::one()), !log_form)
    }

    fn eval_distribution(&self, k: T, log_form: bool) -> T {
        // P(X ≤ k) = Q(k + 1, λ)
        match gamma_inc_pair(k + T::one(), self.rate) {
            Ok((p, q)) => lower_from_pair((q, p), log_form),
            Err(_) => T::nan(),
        }
    }

    fn eval_quantile(&self, p: T, settings: &QuantileSettings<T>) -> T {
        invert_discrete_cdf(
            |k| self.eval_distribution(k, false),
            p,
            self.rate.floor(),
            T::zero(),
            T::infinity(),
            settings,
        )
    }

    fn eval_mean(&self) -> T {
        self.rate
    }

    fn eval_variance(&self) -> T {
        self.rate
    }
}

family_api!(Poisson, rate: A);
