//! Log-normal distribution.

use crate::traits::{cst, FloatScalar};

use super::normal::{standard_normal_cdf, standard_normal_quantile};
use super::{exp_if, log_if, Family, QuantileSettings};

/// Log-normal distribution: `ln X ~ N(μ, σ²)`.
///
/// Valid for finite μ and finite σ > 0. Support [0, ∞).
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, LogNormal};
///
/// let d = LogNormal::new(0.0_f64, 1.0);
/// assert!((d.cdf(1.0) - 0.5).abs() < 1e-15);
/// assert!((d.quantile(0.5) - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormal<T> {
    mu: T,
    sigma: T,
}

impl<T: FloatScalar> LogNormal<T> {
    /// Log-normal distribution with log-mean `mu` and log-standard deviation `sigma`.
    pub fn new(mu: T, sigma: T) -> Self {
        Self { mu, sigma }
    }
}

impl<T: FloatScalar> Family<T> for LogNormal<T> {
    fn params_valid(&self) -> bool {
        self.mu.is_finite() && self.sigma.is_finite() && self.sigma > T::zero()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        if x == T::zero() {
            return log_if(T::zero(), log_form);
        }
        let lx = x.ln();
        let z = (lx - self.mu) / self.sigma;
        let half: T = cst(0.5);
        let ln_sqrt_2pi: T = cst(0.918_938_533_204_672_8);
        exp_if(-half * z * z - self.sigma.ln() - ln_sqrt_2pi - lx, !log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        log_if(standard_normal_cdf((x.ln() - self.mu) / self.sigma), log_form)
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        (self.mu + self.sigma * standard_normal_quantile(p)).exp()
    }

    fn eval_mean(&self) -> T {
        let half: T = cst(0.5);
        (self.mu + half * self.sigma * self.sigma).exp()
    }

    fn eval_variance(&self) -> T {
        let s2 = self.sigma * self.sigma;
        s2.exp_m1() * (self.mu + self.mu + s2).exp()
    }
}

family_api!(LogNormal, mu: A, sigma: B);
