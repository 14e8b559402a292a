//! Bernoulli distribution.

use crate::traits::FloatScalar;

use super::{log_if, Family, QuantileSettings};

/// Bernoulli distribution: 1 with probability p, 0 otherwise.
///
/// Valid for 0 ≤ p ≤ 1.
///
/// # Example
///
/// ```
/// use statis::stats::{Bernoulli, Distribution};
///
/// let b = Bernoulli::new(0.3_f64);
/// assert!((b.pdf(1.0) - 0.3).abs() < 1e-15);
/// assert!((b.cdf(0.0) - 0.7).abs() < 1e-15);
/// assert_eq!(b.pdf(0.5), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli<T> {
    prob: T,
}

impl<T: FloatScalar> Bernoulli<T> {
    /// Bernoulli distribution with success probability `prob`.
    pub fn new(prob: T) -> Self {
        Self { prob }
    }
}

impl<T: FloatScalar> Family<T> for Bernoulli<T> {
    const DISCRETE: bool = true;

    fn params_valid(&self) -> bool {
        self.prob >= T::zero() && self.prob <= T::one()
    }

    fn support(&self) -> (T, T) {
        (T::zero(), T::one())
    }

    fn eval_density(&self, x: T, log_form: bool) -> T {
        if x == T::zero() {
            if log_form {
                (-self.prob).ln_1p()
            } else {
                T::one() - self.prob
            }
        } else {
            log_if(self.prob, log_form)
        }
    }

    fn eval_distribution(&self, _x: T, log_form: bool) -> T {
        // Only k = 0 lies strictly below the top of the support.
        if log_form {
            (-self.prob).ln_1p()
        } else {
            T::one() - self.prob
        }
    }

    fn eval_quantile(&self, p: T, _settings: &QuantileSettings<T>) -> T {
        if p <= T::one() - self.prob {
            T::zero()
        } else {
            T::one()
        }
    }

    fn eval_mean(&self) -> T {
        self.prob
    }

    fn eval_variance(&self) -> T {
        self.prob * (T::one() - self.prob)
    }
}

family_api!(Bernoulli, prob: A);
