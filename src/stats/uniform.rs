//! Continuous uniform distribution.

use crate::traits::{cst, FloatScalar};

use super::{log_if, Family, QuantileSettings};

/// Continuous uniform distribution on [a, b].
///
/// Valid for finite a < b.
///
/// # Example
///
/// ```
/// use statis::stats::{Distribution, Uniform};
///
/// let u = Uniform::new(0.0_f64, 1.0);
/// assert!((u.pdf(0.5) - 1.0).abs() < 1e-14);
/// assert!((u.cdf(0.5) - 0.5).abs() < 1e-14);
/// assert!(Uniform::new(1.0_f64, 1.0).pdf(1.0).is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform<T> {
    lower: T,
    upper: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Uniform distribution on [`lower`, `upper`].
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }
}

impl<T: FloatScalar> Family<T> for Uniform<T> {
    fn params_valid(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite() && self.lower < self.upper
    }

    fn support(&self) -> (T, T) {
        (self.lower, self.upper)
    }

    fn eval_density(&self, _x: T, log_form: bool) -> T {
        log_if((self.upper - self.lower).recip(), log_form)
    }

    fn eval_distribution(&self, x: T, log_form: bool) -> T {
        log_if((x - self.lower) / (self.upper - self.lower), log_form)
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        self.lower + p * (self.upper - self.lower)
    }

    fn eval_mean(&self) -> T {
        let half: T = cst(0.5);
        half * (self.lower + self.upper)
    }

    fn eval_variance(&self) -> T {
        let twelve: T = cst(12.0);
        let d = self.upper - self.lower;
        d * d / twelve
    }
}

family_api!(Uniform, lower: A, upper: B);
